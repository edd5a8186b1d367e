use super::*;

#[test]
fn default_matches_the_shipped_alphabet() {
    let set = GlyphSet::default();
    assert_eq!(set.alphabet(), DEFAULT_GLYPHS);
    assert!(!set.is_empty());
}

#[test]
fn rejects_an_empty_alphabet() {
    let err = GlyphSet::new("").unwrap_err();
    assert!(err.to_string().contains("non-empty"));
}

#[test]
fn pick_always_draws_a_member() {
    let set = GlyphSet::new("!<>-_").unwrap();
    let mut rng = Rng64::new(11);
    for _ in 0..200 {
        assert!(set.contains(set.pick(&mut rng)));
    }
}

#[test]
fn repeats_raise_draw_weight() {
    let set = GlyphSet::new("a___").unwrap();
    assert_eq!(set.len(), 4);
    let mut rng = Rng64::new(5);
    let underscores = (0..1000).filter(|_| set.pick(&mut rng) == '_').count();
    // 3 of 4 slots are underscore; even a rough majority check will hold.
    assert!(underscores > 500, "only {underscores} underscore draws");
}

#[test]
fn serializes_as_a_plain_string() {
    let set = GlyphSet::new("AB").unwrap();
    let json = serde_json::to_string(&set).unwrap();
    assert_eq!(json, "\"AB\"");

    let back: GlyphSet = serde_json::from_str(&json).unwrap();
    assert_eq!(back, set);

    let err = serde_json::from_str::<GlyphSet>("\"\"");
    assert!(err.is_err());
}
