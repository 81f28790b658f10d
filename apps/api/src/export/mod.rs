// Export: package a rendered portfolio as a ZIP and publish it to a static host.
// Hosting clients sit behind `SiteDeployer` so the router can swap them out.

pub mod archive;
pub mod handlers;
pub mod netlify;
