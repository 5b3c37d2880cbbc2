// Resume ingestion: uploaded file → plain text → structured ResumeData.
// The AI structuring step goes through llm_client — no direct API calls here.

pub mod handlers;
pub mod parser;
pub mod prompts;
pub mod text;
