//! Matching semantics: anchoring, case, whitespace, captures, alternation.

use mudlark_syntax::CompiledSyntax;

fn compile(template: &str) -> CompiledSyntax {
    CompiledSyntax::compile(template).expect("template should compile")
}

#[test]
fn literal_skeleton_with_captures() {
    let syntax = compile("put <thing> in <container>");
    let args = syntax.parse("put sword in chest").expect("should match");
    assert_eq!(args.get("thing"), Some("sword"));
    assert_eq!(args.get("container"), Some("chest"));
    assert_eq!(args.argstr(), "put sword in chest");
}

#[test]
fn matching_is_case_insensitive() {
    let syntax = compile("look at <thing>");
    assert!(syntax.parse("LOOK AT sword").is_some());
    assert!(syntax.parse("Look At sword").is_some());
}

#[test]
fn captured_value_preserves_input_case() {
    let syntax = compile("page <who>");
    let args = syntax.parse("page Hesterly").expect("should match");
    assert_eq!(args.get("who"), Some("Hesterly"));
}

#[test]
fn whole_string_anchoring() {
    let syntax = compile("<x>");
    // A default capture takes a single non-space token; a second word has
    // nowhere to go, so the line as a whole does not match.
    assert!(syntax.parse("foo bar").is_none());
    assert!(syntax.parse("foo").is_some());

    let syntax = compile("go north");
    assert!(syntax.parse("go north quickly").is_none());
    assert!(syntax.parse("please go north").is_none());
}

#[test]
fn separator_accepts_any_amount_of_whitespace() {
    let syntax = compile("go <direction>");
    for input in ["go north", "go  north", "go     north"] {
        let args = syntax.parse(input).expect("should match");
        assert_eq!(args.get("direction"), Some("north"), "input: {input}");
    }
}

#[test]
fn separator_requires_at_least_one_space() {
    let syntax = compile("go <direction>");
    assert!(syntax.parse("gonorth").is_none());
}

#[test]
fn alternation_records_first_matching_branch() {
    let syntax = compile("<class> {named|called|=} <names>");

    let args = syntax.parse("thing named foo").expect("should match");
    let optset = args.optset(1).expect("group should match");
    assert_eq!(optset.branch, 0);
    assert_eq!(optset.text, "named");

    let args = syntax.parse("thing = foo").expect("should match");
    assert_eq!(args.optset(1).expect("group should match").branch, 2);
}

#[test]
fn overlapping_branches_prefer_the_leftmost_declared() {
    // Both branches accept "off"; the one written first is recorded.
    let syntax = compile("turn {off|off|offline}");
    let args = syntax.parse("turn off").expect("should match");
    assert_eq!(args.optset(1).expect("group should match").branch, 0);

    let args = syntax.parse("turn offline").expect("should match");
    assert_eq!(args.optset(1).expect("group should match").branch, 2);
}

#[test]
fn failed_alternation_fails_the_whole_parse() {
    let syntax = compile("turn {on|off} <device>");
    assert!(syntax.parse("turn up lamp").is_none());
}

#[test]
fn alternation_branches_may_hold_captures() {
    let syntax = compile("go {to <place>|home}");
    let args = syntax.parse("go to tavern").expect("should match");
    assert_eq!(args.optset(1).expect("group should match").branch, 0);
    assert_eq!(args.get("place"), Some("tavern"));

    let args = syntax.parse("go home").expect("should match");
    assert_eq!(args.optset(1).expect("group should match").branch, 1);
    assert!(args.is_absent("place"));
}

#[test]
fn explicit_pattern_limits_the_capture() {
    let syntax = compile("set <key> to <value:[0-9]+>");
    assert!(syntax.parse("set hp to 20").is_some());
    assert!(syntax.parse("set hp to twenty").is_none());
}

#[test]
fn no_match_is_not_an_error() {
    // Dispatch tries several syntaxes in sequence; a miss is an ordinary
    // `None`, cheap to produce and to ignore.
    let candidates = [
        compile("get <thing> from <container>"),
        compile("get <thing>"),
    ];
    let input = "get lantern";
    let matched: Vec<usize> = candidates
        .iter()
        .enumerate()
        .filter_map(|(index, syntax)| syntax.parse(input).map(|_| index))
        .collect();
    assert_eq!(matched, vec![1]);
}

#[test]
fn empty_template_matches_only_empty_input() {
    let syntax = compile("");
    assert!(syntax.parse("").is_some());
    assert!(syntax.parse("anything").is_none());
}

#[test]
fn empty_capture_is_distinct_from_absent() {
    // A permissive explicit pattern may legitimately capture nothing.
    let syntax = compile("say <text:.*>");
    let args = syntax.parse("say ").expect("should match");
    assert_eq!(args.get("text"), Some(""));
    assert!(!args.is_absent("text"));

    let syntax = compile("say [<text>]");
    let args = syntax.parse("say").expect("should match");
    assert_eq!(args.get("text"), None);
    assert!(args.is_absent("text"));
}
