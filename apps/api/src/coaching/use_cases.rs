//! Registry of coaching endpoints.
//!
//! Every endpoint is the same relay parameterised by a `UseCase`: its prompt
//! template, how the result is enveloped, what happens when the model output
//! cannot be parsed, and the messages shown to the user on failure.

use serde_json::{json, Map, Value};

use crate::coaching::payload::Payload;
use crate::coaching::prompts;
use crate::coaching::template::PromptTemplate;
use crate::llm_client::extract::JsonKind;

/// How the extracted result is wrapped before it is returned.
#[derive(Debug, Clone, Copy)]
pub enum Envelope {
    /// The result object itself.
    Bare,
    /// `{<key>: result}` plus the listed request fields echoed back verbatim.
    Keyed {
        key: &'static str,
        echo: &'static [&'static str],
    },
}

impl Envelope {
    pub fn wrap(&self, result: Value, payload: &Payload) -> Value {
        match self {
            Envelope::Bare => result,
            Envelope::Keyed { key, echo } => {
                let mut body = Map::new();
                body.insert((*key).to_string(), result);
                for field in *echo {
                    body.insert((*field).to_string(), payload.raw(field));
                }
                Value::Object(body)
            }
        }
    }
}

/// What an endpoint does when the model output is not usable JSON.
///
/// The split between endpoints is historical and kept per endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseFallback {
    /// Respond 500 with the parse-failure message.
    Fail,
    /// Respond 200 with `{rawContent, parseError: true}` in place of the result.
    RawContent,
}

impl ParseFallback {
    pub fn degraded(raw_content: &str) -> Value {
        json!({ "rawContent": raw_content, "parseError": true })
    }
}

/// User-facing failure messages.
#[derive(Debug, Clone, Copy)]
pub struct Messages {
    pub rate_limited: &'static str,
    pub credits_exhausted: &'static str,
    pub upstream_failure: &'static str,
    pub parse_failure: &'static str,
}

impl Messages {
    pub const STANDARD: Messages = Messages {
        rate_limited: "Limite de requisições excedido. Por favor, tente novamente mais tarde.",
        credits_exhausted: "Créditos insuficientes. Por favor, adicione créditos ao seu workspace.",
        upstream_failure: "Erro ao se comunicar com o serviço de IA",
        parse_failure: "Erro ao processar a resposta da IA",
    };
}

#[derive(Debug)]
pub struct UseCase {
    /// Path segment under `/functions/v1/`.
    pub slug: &'static str,
    pub prompt: PromptTemplate,
    pub envelope: Envelope,
    pub on_parse_failure: ParseFallback,
    /// Top-level keys the extracted object must carry.
    pub required: &'static [(&'static str, JsonKind)],
    pub temperature: Option<f32>,
    pub messages: Messages,
}

const ANALYSIS: Envelope = Envelope::Keyed {
    key: "analysis",
    echo: &[],
};

pub static SKILLS_GAP: UseCase = UseCase {
    slug: "analyze-skills-gap",
    prompt: prompts::SKILLS_GAP,
    envelope: ANALYSIS,
    on_parse_failure: ParseFallback::Fail,
    required: &[("summary", JsonKind::String), ("missingSkills", JsonKind::Array)],
    temperature: None,
    messages: Messages::STANDARD,
};

pub static SWOT: UseCase = UseCase {
    slug: "swot-analysis",
    prompt: prompts::SWOT,
    envelope: ANALYSIS,
    on_parse_failure: ParseFallback::RawContent,
    required: &[
        ("strengths", JsonKind::Array),
        ("weaknesses", JsonKind::Array),
        ("opportunities", JsonKind::Array),
        ("threats", JsonKind::Array),
    ],
    temperature: None,
    messages: Messages::STANDARD,
};

pub static VISION_ALIGNMENT: UseCase = UseCase {
    slug: "vision-alignment",
    prompt: prompts::VISION_ALIGNMENT,
    envelope: ANALYSIS,
    on_parse_failure: ParseFallback::Fail,
    required: &[("summary", JsonKind::String), ("actionSteps", JsonKind::Array)],
    temperature: None,
    messages: Messages::STANDARD,
};

pub static CONTENT_STRATEGY: UseCase = UseCase {
    slug: "content-strategy",
    prompt: prompts::CONTENT_STRATEGY,
    envelope: Envelope::Bare,
    on_parse_failure: ParseFallback::RawContent,
    required: &[("pillars", JsonKind::Array), ("postIdeas", JsonKind::Array)],
    temperature: Some(0.8),
    messages: Messages::STANDARD,
};

pub static ROADMAP: UseCase = UseCase {
    slug: "generate-roadmap",
    prompt: prompts::ROADMAP,
    envelope: Envelope::Keyed {
        key: "roadmap",
        echo: &["currentJob", "targetJob"],
    },
    on_parse_failure: ParseFallback::Fail,
    required: &[("milestones", JsonKind::Array)],
    temperature: None,
    messages: Messages {
        parse_failure: "Erro ao processar o roadmap gerado pela IA",
        ..Messages::STANDARD
    },
};

pub static INTERVIEW_COACH: UseCase = UseCase {
    slug: "interview-coach",
    prompt: prompts::INTERVIEW_COACH,
    envelope: Envelope::Bare,
    on_parse_failure: ParseFallback::Fail,
    required: &[("questions", JsonKind::Array)],
    temperature: Some(0.7),
    messages: Messages::STANDARD,
};

pub static MENTOR_MATCHING: UseCase = UseCase {
    slug: "mentor-matching",
    prompt: prompts::MENTOR_MATCHING,
    envelope: ANALYSIS,
    on_parse_failure: ParseFallback::RawContent,
    required: &[("mentorProfiles", JsonKind::Array)],
    temperature: None,
    messages: Messages::STANDARD,
};

pub static LINKEDIN_OPTIMIZER: UseCase = UseCase {
    slug: "linkedin-optimizer",
    prompt: prompts::LINKEDIN_OPTIMIZER,
    envelope: Envelope::Bare,
    on_parse_failure: ParseFallback::RawContent,
    required: &[("suggestedHeadline", JsonKind::String)],
    temperature: None,
    messages: Messages::STANDARD,
};

pub static RESUME_OPTIMIZER: UseCase = UseCase {
    slug: "resume-optimizer",
    prompt: prompts::RESUME_OPTIMIZER,
    envelope: ANALYSIS,
    on_parse_failure: ParseFallback::Fail,
    required: &[("improvements", JsonKind::Array)],
    temperature: None,
    messages: Messages {
        parse_failure: "Erro ao processar a análise do currículo",
        ..Messages::STANDARD
    },
};

pub static SCHEDULE_OPTIMIZER: UseCase = UseCase {
    slug: "schedule-optimizer",
    prompt: prompts::SCHEDULE_OPTIMIZER,
    envelope: Envelope::Bare,
    on_parse_failure: ParseFallback::RawContent,
    required: &[("weeklyPlan", JsonKind::Array)],
    temperature: None,
    messages: Messages::STANDARD,
};

pub static PERSONAL_BRANDING: UseCase = UseCase {
    slug: "personal-branding",
    prompt: prompts::PERSONAL_BRANDING,
    envelope: ANALYSIS,
    on_parse_failure: ParseFallback::RawContent,
    required: &[("brandStatement", JsonKind::String)],
    temperature: Some(0.8),
    messages: Messages::STANDARD,
};

pub static SALARY_BENCHMARK: UseCase = UseCase {
    slug: "salary-benchmark",
    prompt: prompts::SALARY_BENCHMARK,
    envelope: Envelope::Bare,
    on_parse_failure: ParseFallback::Fail,
    required: &[("range", JsonKind::Object)],
    temperature: Some(0.3),
    messages: Messages::STANDARD,
};

pub static ALL: [&UseCase; 12] = [
    &SKILLS_GAP,
    &SWOT,
    &VISION_ALIGNMENT,
    &CONTENT_STRATEGY,
    &ROADMAP,
    &INTERVIEW_COACH,
    &MENTOR_MATCHING,
    &LINKEDIN_OPTIMIZER,
    &RESUME_OPTIMIZER,
    &SCHEDULE_OPTIMIZER,
    &PERSONAL_BRANDING,
    &SALARY_BENCHMARK,
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn payload(value: Value) -> Payload {
        Payload::from_slice(value.to_string().as_bytes()).unwrap()
    }

    #[test]
    fn test_slugs_are_unique() {
        let slugs: HashSet<_> = ALL.iter().map(|u| u.slug).collect();
        assert_eq!(slugs.len(), ALL.len());
    }

    #[test]
    fn test_bare_envelope_returns_result_unchanged() {
        let result = json!({"pillars": []});
        let wrapped = Envelope::Bare.wrap(result.clone(), &payload(json!({"x": 1})));
        assert_eq!(wrapped, result);
    }

    #[test]
    fn test_keyed_envelope_echoes_request_fields() {
        let p = payload(json!({"currentJob": "Accountant", "targetJob": "Data Analyst", "industry": "Finance"}));
        let wrapped = ROADMAP.envelope.wrap(json!({"milestones": []}), &p);
        assert_eq!(
            wrapped,
            json!({
                "roadmap": {"milestones": []},
                "currentJob": "Accountant",
                "targetJob": "Data Analyst"
            })
        );
    }

    #[test]
    fn test_keyed_envelope_echoes_missing_fields_as_null() {
        let wrapped = ROADMAP.envelope.wrap(json!({}), &payload(json!({})));
        assert_eq!(wrapped["currentJob"], Value::Null);
        assert_eq!(wrapped["targetJob"], Value::Null);
    }

    #[test]
    fn test_degraded_result_carries_raw_text() {
        assert_eq!(
            ParseFallback::degraded("sem json"),
            json!({"rawContent": "sem json", "parseError": true})
        );
    }

    /// Parse-failure policy differs per endpoint; pin it so any change is deliberate.
    #[test]
    fn test_parse_fallback_policy_per_endpoint() {
        let failing: Vec<_> = ALL
            .iter()
            .filter(|u| u.on_parse_failure == ParseFallback::Fail)
            .map(|u| u.slug)
            .collect();
        assert_eq!(
            failing,
            vec![
                "analyze-skills-gap",
                "vision-alignment",
                "generate-roadmap",
                "interview-coach",
                "resume-optimizer",
                "salary-benchmark",
            ]
        );
    }

    #[test]
    fn test_prompt_skeletons_satisfy_declared_shape() {
        use crate::llm_client::extract::{check_shape, extract_json};
        for use_case in ALL {
            let skeleton = extract_json(use_case.prompt.system).unwrap();
            assert!(
                check_shape(&skeleton, use_case.required).is_ok(),
                "{} skeleton does not match its required keys",
                use_case.slug
            );
        }
    }
}
