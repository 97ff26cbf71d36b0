use picturebook::{ApprovalSurface, ConsoleApprovalSurface, PicturebookErrorKind, is_approval};
use std::io::Cursor;

fn surface(input: &str) -> ConsoleApprovalSurface<Cursor<Vec<u8>>, Vec<u8>> {
    ConsoleApprovalSurface::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

#[test]
fn test_only_yes_approves() {
    for answer in ["yes", "YES", "  Yes  ", "yes\r\n"] {
        assert!(is_approval(answer), "{:?}", answer);
    }
    for answer in ["y", "no", "", "yes please", "sure"] {
        assert!(!is_approval(answer), "{:?}", answer);
    }
}

#[test]
fn test_prompt_text_reads_one_line() -> anyhow::Result<()> {
    let surface = surface("Gravity\n5 year olds\n");

    assert_eq!(surface.prompt_text("Topic: ")?, "Gravity");
    assert_eq!(surface.prompt_text("Audience: ")?, "5 year olds");

    let output = String::from_utf8(surface.into_output())?;
    assert_eq!(output, "Topic: Audience: ");
    Ok(())
}

#[test]
fn test_confirm_answers() -> anyhow::Result<()> {
    let surface = surface("no\nYes\n");

    assert!(!surface.confirm("Happy? ")?);
    assert!(surface.confirm("Happy? ")?);
    Ok(())
}

#[test]
fn test_show_prints_label_and_text() -> anyhow::Result<()> {
    let surface = surface("");
    surface.show("outline", "\tAn apple falls\n")?;

    let output = String::from_utf8(surface.into_output())?;
    assert!(output.contains("outline"));
    assert!(output.contains("\tAn apple falls"));
    Ok(())
}

#[test]
fn test_closed_input_is_a_surface_error() {
    let surface = surface("");

    let err = surface.confirm("Happy? ").unwrap_err();
    assert!(matches!(err.kind(), PicturebookErrorKind::Surface(_)));
}
