use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        TurrellError::invalid_color("x")
            .to_string()
            .contains("invalid color format:")
    );
    assert!(
        TurrellError::invalid_config("x")
            .to_string()
            .contains("invalid config:")
    );
    assert!(
        TurrellError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
    assert!(TurrellError::encode("x").to_string().contains("encode error:"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = TurrellError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
