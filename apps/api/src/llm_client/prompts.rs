// Shared prompt fragments.
// Each use case defines its own templates in coaching/prompts.rs.

/// Appended to every system prompt: the reply must be a single JSON object.
pub const JSON_ONLY_INSTRUCTION: &str = "\
Responda SOMENTE com um objeto JSON válido, seguindo exatamente a estrutura do exemplo. \
Não inclua texto fora do JSON. Escreva todo o conteúdo em português do Brasil.";
