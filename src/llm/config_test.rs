use super::*;

// Env-var reads are process-global, so `from_env` itself is exercised only
// through the pure helpers here; the happy path is covered by `main`
// wiring and the provider clients.

#[test]
fn provider_defaults_to_anthropic() {
    assert_eq!(parse_provider(None).unwrap(), LlmProviderKind::Anthropic);
}

#[test]
fn provider_parses_known_names() {
    assert_eq!(parse_provider(Some("anthropic")).unwrap(), LlmProviderKind::Anthropic);
    assert_eq!(parse_provider(Some("openai")).unwrap(), LlmProviderKind::OpenAi);
}

#[test]
fn provider_rejects_unknown_names() {
    let err = parse_provider(Some("bad")).unwrap_err().to_string();
    assert!(err.contains("unknown LLM_PROVIDER"));
}

#[test]
fn default_models_per_provider() {
    assert_eq!(default_model(LlmProviderKind::Anthropic), "claude-sonnet-4-5-20250929");
    assert_eq!(default_model(LlmProviderKind::OpenAi), "gpt-4o");
}
