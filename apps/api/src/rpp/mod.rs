// RPP (Rencana Pelaksanaan Pembelajaran) generation.
// Implements: input validation, tier classification, template catalog, prompt composition, generation.
// All LLM calls go through llm_client; nothing here talks HTTP to the provider.

pub mod composer;
pub mod generator;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod templates;
pub mod tier;
