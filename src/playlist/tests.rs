use super::*;

fn t(name: &str) -> Track {
    Track {
        path: format!("/music/{name}.mp3").into(),
        title: name.to_string(),
        artist: String::new(),
    }
}

fn abc() -> Playlist {
    let mut p = Playlist::new();
    p.extend([t("A"), t("B"), t("C")]);
    p
}

#[test]
fn append_preserves_order() {
    let mut p = Playlist::new();
    p.append(t("one"));
    p.append(t("two"));
    assert_eq!(p.len(), 2);
    assert_eq!(p.get(0).map(|t| t.title.as_str()), Some("one"));
    assert_eq!(p.get(1).map(|t| t.title.as_str()), Some("two"));
    assert_eq!(p.current().map(|t| t.title.as_str()), Some("one"));
}

#[test]
fn advance_visits_b_c_a() {
    let mut p = abc();
    assert_eq!(p.cursor(), 0);
    let visited: Vec<String> = (0..3)
        .map(|_| p.advance().unwrap().title.clone())
        .collect();
    assert_eq!(visited, vec!["B", "C", "A"]);
}

#[test]
fn advance_len_times_is_cyclic() {
    for n in 1..=6 {
        let mut p = Playlist::new();
        p.extend((0..n).map(|i| t(&i.to_string())));
        p.advance().unwrap();
        let start = p.cursor();
        for _ in 0..n {
            p.advance().unwrap();
        }
        assert_eq!(p.cursor(), start);
    }
}

#[test]
fn retreat_after_advance_restores_current() {
    let mut p = abc();
    for _ in 0..4 {
        let before = p.current().cloned();
        p.advance().unwrap();
        p.retreat().unwrap();
        assert_eq!(p.current().cloned(), before);
        p.advance().unwrap();
    }
}

#[test]
fn retreat_wraps_to_last() {
    let mut p = abc();
    assert_eq!(p.retreat().unwrap().title, "C");
    assert_eq!(p.cursor(), 2);
    assert!(p.is_at_end());
}

#[test]
fn empty_playlist_navigation_fails() {
    let mut p = Playlist::new();
    assert_eq!(p.advance(), Err(PlaylistError::Empty));
    assert_eq!(p.retreat(), Err(PlaylistError::Empty));
    assert!(p.current().is_none());
    assert!(!p.is_at_end());
}

#[test]
fn clear_resets_cursor() {
    let mut p = abc();
    p.advance().unwrap();
    p.advance().unwrap();
    p.clear();
    assert!(p.is_empty());
    assert_eq!(p.cursor(), 0);
    p.append(t("D"));
    assert_eq!(p.current().map(|t| t.title.as_str()), Some("D"));
}
