use insta::assert_snapshot;
use nestout_render::{
    render_json, ColorChoice, NestedRenderer, RenderError, RenderValue, UnsupportedPolicy,
};
use serde_json::json;

fn no_return_payload() -> serde_json::Value {
    json!({
        "web02": "Minion did not return. [Not connected]",
        "db01": {
            "reason": "timeout",
            "jid": "20260101120000123456",
            "retcode": 254
        },
        "web01": "Minion did not return. [No response]\nThe minions may not have all finished running and any remaining minions will return upon completion."
    })
}

#[test]
fn test_no_return_report() {
    let output = render_json(&no_return_payload(), ColorChoice::Never).unwrap();

    assert_snapshot!(output, @r"
    db01:
        jid:
            20260101120000123456
        reason:
            timeout
        retcode:
    web01:
        Minion did not return. [No response]
        The minions may not have all finished running and any remaining minions will return upon completion.
    web02:
        Minion did not return. [Not connected]
    ");
}

#[test]
fn test_no_return_report_from_yaml() {
    let value = RenderValue::from_yaml_str(
        r#"
minion2:
  reason: timeout
minion1: |-
  first
  second
"#,
    )
    .unwrap();

    let output = NestedRenderer::plain().render(&value).unwrap();
    assert_eq!(
        output,
        "minion1:\n    first\n    second\nminion2:\n    reason:\n        timeout\n"
    );
}

#[test]
fn test_strict_report_rejects_retcode() {
    let value = RenderValue::from(no_return_payload());
    let renderer = NestedRenderer::plain().with_unsupported(UnsupportedPolicy::Reject);

    let err = renderer.render(&value).unwrap_err();
    assert!(matches!(
        err,
        RenderError::UnsupportedValue { ref path, kind: "number" } if path == "db01.retcode"
    ));
}

#[test]
fn test_deep_input_hits_ceiling() {
    let mut value = RenderValue::text("bottom");
    for level in 0..200 {
        value = RenderValue::fields([(format!("l{level}"), value)]);
    }

    let err = NestedRenderer::plain().render(&value).unwrap_err();
    assert!(matches!(err, RenderError::MaxDepthExceeded { limit: 128, .. }));

    let output = NestedRenderer::plain().with_max_depth(256).render(&value).unwrap();
    assert_eq!(output.lines().count(), 201);
    assert!(output.ends_with(&format!("{}bottom\n", " ".repeat(200 * 4))));
}

#[test]
fn test_concurrent_renders_share_one_renderer() {
    let renderer = std::sync::Arc::new(NestedRenderer::plain());
    let value = std::sync::Arc::new(RenderValue::from(no_return_payload()));
    let expected = renderer.render(&value).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let renderer = renderer.clone();
            let value = value.clone();
            std::thread::spawn(move || renderer.render(&value).unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
