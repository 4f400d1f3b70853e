use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        IdenticonError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        IdenticonError::render("x")
            .to_string()
            .contains("render error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("disk full");
    let err = IdenticonError::Other(anyhow::Error::new(base).context("write png 'a.png'"));
    let msg = format!("{err:#}");
    assert!(msg.contains("write png 'a.png'"));
    assert!(msg.contains("disk full"));
}

#[test]
fn io_errors_convert_through_anyhow() {
    fn fails() -> IdenticonResult<()> {
        let e: anyhow::Result<()> = Err(anyhow::anyhow!("permission denied"));
        Ok(e?)
    }
    let err = fails().unwrap_err();
    assert!(matches!(err, IdenticonError::Other(_)));
    assert!(err.to_string().contains("permission denied"));
}
