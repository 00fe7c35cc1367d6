use csspreview_lib::{extract, locate};
use proptest::prelude::*;

fn selector() -> impl Strategy<Value = String> {
    "[.#]?[a-z][a-z0-9-]{0,8}"
}

fn body() -> impl Strategy<Value = String> {
    // Anything without braces.
    "[^{}]{0,40}"
}

fn declarations() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec(("-{0,2}[a-z][a-z-]{0,6}", "[a-z0-9 #%().]{0,12}"), 0..6)
}

proptest! {
    #[test]
    fn body_is_text_between_braces(
        before in prop::collection::vec((selector(), body()), 0..3),
        sel in selector(),
        inner in body(),
        after in prop::collection::vec((selector(), body()), 0..3),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut text = String::new();
        for (s, b) in &before {
            text.push_str(&format!("{} {{{}}}\n", s, b));
        }
        text.push_str(&sel);
        text.push_str(" {");
        let open = text.len() - 1;
        text.push_str(&inner);
        let close = text.len();
        text.push('}');
        for (s, b) in &after {
            text.push_str(&format!("\n{} {{{}}}", s, b));
        }

        // Any character boundary strictly between the braces.
        let offsets: Vec<usize> = inner
            .char_indices()
            .map(|(i, _)| open + 1 + i)
            .chain(std::iter::once(close))
            .collect();
        let cursor = offsets[pick.index(offsets.len())];

        let rule = locate(&text, cursor).unwrap();
        prop_assert_eq!(rule.body_text, &text[open + 1..close]);
        prop_assert_eq!(rule.selector_text, sel.as_str());
    }

    #[test]
    fn extraction_survives_reconstruction(pairs in declarations()) {
        let body: String = pairs
            .iter()
            .map(|(name, value)| format!("{}: {};", name, value))
            .collect();
        let map = extract(&body);
        prop_assert_eq!(extract(&map.to_declarations()), map);
    }

    #[test]
    fn last_duplicate_wins(
        name in "[a-z]{1,6}",
        first in "[a-z0-9]{1,6}",
        last in "[a-z0-9]{1,6}",
    ) {
        let body = format!("{name}: {first}; other: x; {name}: {last};");
        let map = extract(&body);
        prop_assert_eq!(map.get(&name), Some(last.as_str()));
    }
}
