// Career-coaching endpoints.
// Every endpoint is the same prompt relay parameterised by a `UseCase`.
// All gateway calls go through llm_client.

pub mod handlers;
pub mod payload;
pub mod prompts;
pub mod relay;
pub mod template;
pub mod use_cases;
