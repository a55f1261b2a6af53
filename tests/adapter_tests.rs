use bedrock_summarizer::ai::adapter::{
    AnthropicMessagesAdapter, LlamaAdapter, MistralAdapter, PromptAdapter, adapter_for_model,
    model_provider,
};
use bedrock_summarizer::core::models::GenerationParams;
use bedrock_summarizer::errors::SummarizerError;
use serde_json::json;

#[test]
fn test_model_provider_skips_inference_profile_prefix() {
    assert_eq!(
        model_provider("anthropic.claude-3-haiku-20240307-v1:0"),
        Some("anthropic")
    );
    assert_eq!(
        model_provider("us.anthropic.claude-3-5-sonnet-20240620-v1:0"),
        Some("anthropic")
    );
    assert_eq!(model_provider("eu.meta.llama3-2-3b-instruct-v1:0"), Some("meta"));
    assert_eq!(model_provider(""), None);
    assert_eq!(model_provider("us."), None);
}

#[test]
fn test_adapter_for_model_selects_family() {
    let family = |id: &str| adapter_for_model(id).map(|a| a.family());

    assert_eq!(family("anthropic.claude-3-haiku-20240307-v1:0"), Some("anthropic"));
    assert_eq!(family("meta.llama3-8b-instruct-v1:0"), Some("meta"));
    assert_eq!(family("mistral.mistral-7b-instruct-v0:2"), Some("mistral"));
    assert_eq!(family("amazon.titan-text-express-v1"), None);
    assert_eq!(family("not-a-model"), None);
}

#[test]
fn test_anthropic_body_uses_messages_shape() {
    let body = AnthropicMessagesAdapter.build_body("Summarize this", &GenerationParams::default());

    assert_eq!(body["anthropic_version"], "bedrock-2023-05-31");
    assert_eq!(
        body["messages"],
        json!([{ "role": "user", "content": "Summarize this" }])
    );
    assert_eq!(body["max_tokens"], 500);
    assert_eq!(body["top_k"], 150);
    assert_eq!(body["temperature"], json!(0.3));
    assert_eq!(body["top_p"], json!(0.8));
    assert!(body.get("prompt").is_none());
}

#[test]
fn test_anthropic_extracts_first_text_block() {
    let response = json!({
        "content": [
            { "type": "tool_use", "id": "t1", "name": "noop", "input": {} },
            { "type": "text", "text": "The summary." }
        ]
    });

    assert_eq!(
        AnthropicMessagesAdapter.extract_text(&response).unwrap(),
        "The summary."
    );
}

#[test]
fn test_anthropic_rejects_missing_or_blank_text() {
    let cases = [
        json!({}),
        json!({ "content": "text" }),
        json!({ "content": [] }),
        json!({ "content": [{ "type": "text", "text": 7 }] }),
        json!({ "content": [{ "type": "text", "text": "   " }] }),
    ];

    for response in &cases {
        let err = AnthropicMessagesAdapter.extract_text(response).unwrap_err();
        assert!(
            matches!(err, SummarizerError::ResponseShape(_)),
            "case {response}: {err}"
        );
    }
}

#[test]
fn test_llama_body_uses_instruct_template() {
    let params = GenerationParams {
        max_tokens: 512,
        ..GenerationParams::default()
    };
    let body = LlamaAdapter.build_body("Summarize this", &params);

    let prompt = body["prompt"].as_str().unwrap();
    assert!(prompt.starts_with("<|begin_of_text|><|start_header_id|>user<|end_header_id|>"));
    assert!(prompt.contains("Summarize this<|eot_id|>"));
    assert!(prompt.ends_with("<|start_header_id|>assistant<|end_header_id|>\n\n"));
    assert_eq!(body["max_gen_len"], 512);
    assert!(body.get("messages").is_none());
    assert!(body.get("top_k").is_none());
}

#[test]
fn test_configured_sampling_values_are_sent_unchanged() {
    let params = GenerationParams {
        temperature: 0.7,
        top_p: 0.9,
        ..GenerationParams::default()
    };

    for adapter in [
        adapter_for_model("anthropic.claude-3-haiku-20240307-v1:0").unwrap(),
        adapter_for_model("meta.llama3-8b-instruct-v1:0").unwrap(),
        adapter_for_model("mistral.mistral-7b-instruct-v0:2").unwrap(),
    ] {
        let body = adapter.build_body("x", &params).to_string();
        assert!(body.contains("\"temperature\":0.7"), "{}: {body}", adapter.family());
        assert!(body.contains("\"top_p\":0.9"), "{}: {body}", adapter.family());
    }
}

#[test]
fn test_llama_extracts_generation() {
    let response = json!({ "generation": "Short.", "stop_reason": "stop" });
    assert_eq!(LlamaAdapter.extract_text(&response).unwrap(), "Short.");

    let err = LlamaAdapter
        .extract_text(&json!({ "outputs": [] }))
        .unwrap_err();
    assert!(matches!(err, SummarizerError::ResponseShape(_)));
}

#[test]
fn test_mistral_body_uses_flat_prompt_shape() {
    let body = MistralAdapter.build_body("Summarize this", &GenerationParams::default());

    assert_eq!(body["prompt"], "<s>[INST] Summarize this [/INST]");
    assert_eq!(body["max_tokens"], 500);
    assert!(body.get("messages").is_none());
}

#[test]
fn test_mistral_extracts_first_output() {
    let response = json!({ "outputs": [{ "text": "Mistral says hi.", "stop_reason": "stop" }] });
    assert_eq!(
        MistralAdapter.extract_text(&response).unwrap(),
        "Mistral says hi."
    );

    for bad in [json!({ "outputs": [] }), json!({ "outputs": [{}] }), json!(null)] {
        assert!(MistralAdapter.extract_text(&bad).is_err(), "case {bad}");
    }
}
