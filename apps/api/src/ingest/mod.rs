// Resume ingestion: uploaded document -> plain text -> structured ResumeData.
// All LLM calls go through llm_client; PDF decoding runs off the async executor.

pub mod handlers;
pub mod parser;
pub mod pdf;
pub mod prompts;
