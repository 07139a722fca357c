//! Prompt templates: static system/user text rendered against a request payload.

use chrono::NaiveDate;

use crate::coaching::payload::Payload;
use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;
use crate::llm_client::PromptPair;

/// A system/user template pair. The user text carries `{field}` placeholders
/// for each name in `fields`, plus an optional `{today}`.
#[derive(Debug)]
pub struct PromptTemplate {
    pub system: &'static str,
    pub user: &'static str,
    pub fields: &'static [&'static str],
}

impl PromptTemplate {
    /// Renders the prompt pair for one request. Never fails: absent fields
    /// render as the payload placeholder.
    pub fn build(&self, payload: &Payload, today: NaiveDate) -> PromptPair {
        PromptPair {
            system: format!("{}\n\n{}", self.system, JSON_ONLY_INSTRUCTION),
            user: self.render_user(payload, today),
        }
    }

    /// Single left-to-right pass over the template. Substituted values are
    /// never re-scanned, so braces inside user input reach the model verbatim.
    fn render_user(&self, payload: &Payload, today: NaiveDate) -> String {
        let mut out = String::with_capacity(self.user.len());
        let mut rest = self.user;

        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];

            let substitution = after.find('}').and_then(|close| {
                let name = &after[..close];
                let value = if name == "today" {
                    Some(today.format("%Y-%m-%d").to_string())
                } else if self.fields.iter().any(|field| *field == name) {
                    Some(payload.text(name))
                } else {
                    None
                };
                value.map(|v| (v, close))
            });

            match substitution {
                Some((value, close)) => {
                    out.push_str(&value);
                    rest = &after[close + 1..];
                }
                None => {
                    out.push('{');
                    rest = after;
                }
            }
        }

        out.push_str(rest);
        out
    }
}
