use crate::harness::TestHome;
use rcd_core::directive;

#[test]
fn test_history_directive_replays_this_homes_file() {
    let home = TestHome::new().unwrap();

    let directive = directive::history(&home.history_path());

    assert!(directive.contains(&format!("tac {}", home.history_path().display())));
    assert!(directive.ends_with("| fzf || echo .)\""));
}

#[test]
fn test_plain_directive_targets_the_given_directory() {
    let home = TestHome::new().unwrap();
    let target = home.make_dir("projects/alpha").unwrap();

    assert_eq!(directive::plain(&target), format!("\\cd \"{}\"", target));
}

#[test]
fn test_fuzzy_directive_starts_from_the_given_root() {
    let home = TestHome::new().unwrap();
    let start = home.make_dir("src").unwrap();

    let directive = directive::fuzzy(&start);
    assert!(directive.contains(&format!("find {} ", start)));
}

#[test]
fn test_init_snippet_feeds_cd_back_through_the_binary() {
    let snippet = rcd_core::init_snippet();

    // The function the user's shell evaluates must call back into `rcd cd`,
    // and the alias must route plain `cd` through it.
    assert!(snippet.contains(r#"eval "$(command rcd cd "$@")""#));
    assert!(snippet.contains(r#"alias cd="rcd""#));
}
