use glossgen::glossary::render;
use glossgen::{cross_reference, LookupPolicy, PageStyle, RenderEvent, TermIndex};
use pretty_assertions::assert_eq;

fn link<'a>(text: &'a str, target: &str) -> RenderEvent<'a> {
    RenderEvent::Link {
        text,
        target: target.to_string(),
    }
}

fn index() -> TermIndex {
    TermIndex::parse(
        "fruit\nPart of a plant.\n\nApple\nA fruit.\n\nBanana\nA yellow fruit, like an Apple?\n\n--\nA dash pair.\n",
    )
}

#[test]
fn linked_word_is_split_from_trailing_punctuation() {
    let index = index();
    let events = cross_reference(&index, "A fruit.", LookupPolicy::ExactCase);
    assert_eq!(
        events,
        vec![
            RenderEvent::Text("A"),
            RenderEvent::Text(" "),
            link("fruit", "fruit.html"),
            RenderEvent::Text("."),
        ]
    );
}

#[test]
fn exact_case_lookup_ignores_case_variants() {
    let index = index();
    let events = cross_reference(&index, "Fruit or APPLE or Apple", LookupPolicy::ExactCase);
    let links: Vec<&RenderEvent> = events
        .iter()
        .filter(|e| matches!(e, RenderEvent::Link { .. }))
        .collect();
    assert_eq!(links, vec![&link("Apple", "Apple.html")]);
}

#[test]
fn ignore_case_lookup_links_to_the_stored_spelling() {
    let index = index();
    let events = cross_reference(&index, "Fruit or APPLE", LookupPolicy::IgnoreCase);
    assert_eq!(
        events,
        vec![
            link("Fruit", "fruit.html"),
            RenderEvent::Text(" "),
            RenderEvent::Text("or"),
            RenderEvent::Text(" "),
            link("APPLE", "Apple.html"),
        ]
    );
}

#[test]
fn separator_runs_can_name_a_term() {
    let index = index();
    let events = cross_reference(&index, "yes--no", LookupPolicy::ExactCase);
    assert_eq!(
        events,
        vec![RenderEvent::Text("yes"), link("--", "--.html"), RenderEvent::Text("no")]
    );
}

#[test]
fn empty_definition_has_no_events() {
    let index = index();
    assert!(cross_reference(&index, "", LookupPolicy::ExactCase).is_empty());
}

#[test]
fn rendering_is_deterministic() {
    let index = index();
    let text = index.get("Banana").expect("Banana definition");
    let first = cross_reference(&index, text, LookupPolicy::ExactCase);
    let second = cross_reference(&index, text, LookupPolicy::ExactCase);
    assert_eq!(first, second);
}

#[test]
fn events_concatenate_back_to_the_definition() {
    let index = index();
    for (term, definition) in index.iter() {
        let rebuilt: String = cross_reference(&index, definition, LookupPolicy::IgnoreCase)
            .into_iter()
            .map(|event| match event {
                RenderEvent::Text(text) | RenderEvent::Link { text, .. } => text,
            })
            .collect();
        assert_eq!(rebuilt, definition, "lossy cross-reference for {}", term);
    }
}

#[test]
fn term_page_markup_matches_the_template() {
    let index = index();
    let definition = index.get("Banana").expect("Banana definition");
    let events = cross_reference(&index, definition, LookupPolicy::ExactCase);

    let mut out = Vec::new();
    render::write_term_page(&mut out, "Banana", events, &PageStyle::default()).expect("render");
    let html = String::from_utf8(out).expect("utf-8 output");

    let expected = concat!(
        "<!DOCTYPE html>\n",
        "<html>\n",
        "<head>\n",
        "<meta charset=\"utf-8\">\n",
        "<title>Banana</title>\n",
        "<link rel=\"stylesheet\" href=\"style.css\">\n",
        "</head>\n",
        "<body>\n",
        "<h2>Banana</h2>\n",
        "<blockquote>A yellow <a id=\"link\" href=\"fruit.html\">fruit</a>, like an ",
        "<a id=\"link\" href=\"Apple.html\">Apple</a>?</blockquote>",
        "<hr />\n",
        "<p>Return to <a id=\"link\" href=\"index.html\">index</a>.</p>\n",
        "</body>\n",
        "</html>\n",
    );
    assert_eq!(html, expected);
}

#[test]
fn index_page_lists_terms_in_order() {
    let index = index();
    let style = PageStyle {
        attribution: "<p>Created by tests</p>".to_string(),
        ..PageStyle::default()
    };

    let mut out = Vec::new();
    render::write_index_page(&mut out, index.sorted_terms(), &style).expect("render");
    let html = String::from_utf8(out).expect("utf-8 output");

    let expected = concat!(
        "<!DOCTYPE html>\n",
        "<html>\n",
        "<head>\n",
        "<meta charset=\"utf-8\">\n",
        "<title>Glossary</title>\n",
        "<link rel=\"stylesheet\" href=\"style.css\">\n",
        "</head>\n",
        "<body>\n",
        "<h2>Glossary</h2>\n",
        "<hr />\n",
        "<ul>\n",
        "<li><a id=\"link\" href=\"--.html\">--</a></li>\n",
        "<li><a id=\"link\" href=\"Apple.html\">Apple</a></li>\n",
        "<li><a id=\"link\" href=\"Banana.html\">Banana</a></li>\n",
        "<li><a id=\"link\" href=\"fruit.html\">fruit</a></li>\n",
        "</ul>\n",
        "<p>Created by tests</p>\n",
        "</body>\n",
        "</html>\n",
    );
    assert_eq!(html, expected);
}
