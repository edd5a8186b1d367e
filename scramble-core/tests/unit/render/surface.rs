use super::*;

#[test]
fn buffer_surface_replaces_whole_content() {
    let mut surface = BufferSurface::default();
    assert_eq!(surface.contents(), "");

    surface.set_text("HELLO");
    assert_eq!(surface.text(), "HELLO");

    surface.set_text("H");
    assert_eq!(surface.contents(), "H");
}

#[test]
fn mut_references_forward_both_ways() {
    fn rewrite<S: TextSurface>(mut surface: S) -> String {
        let old = surface.text();
        surface.set_text("NEW");
        old
    }

    let mut buffer = BufferSurface::new("OLD");
    let old = rewrite(&mut buffer);
    assert_eq!(old, "OLD");
    assert_eq!(buffer.contents(), "NEW");
}
