//! Property tests for the converters

use folio_babel::formats::html::convert_text as html_text;
use folio_babel::formats::markdown::serializer::convert_text as markdown_text;
use folio_babel::{
    tree_to_html, tree_to_markdown, Content, ContentNode, ContentTree, ListType, TextFormat,
    TextNode,
};
use proptest::prelude::*;
use serde_json::{json, Value};

fn expected_html(text: &str, mask: u32) -> String {
    let tags = ["strong", "em", "s", "u", "code"];
    let mut out = text.to_string();
    for (bit, tag) in tags.iter().enumerate() {
        if mask & (1 << bit) != 0 {
            out = format!("<{tag}>{out}</{tag}>");
        }
    }
    out
}

fn expected_markdown(text: &str, mask: u32) -> String {
    let delimiters = [(1, "**"), (2, "*"), (4, "~~"), (16, "`")];
    let mut out = text.to_string();
    for (bit, delimiter) in delimiters {
        if mask & bit != 0 {
            out = format!("{delimiter}{out}{delimiter}");
        }
    }
    out
}

fn leaf() -> impl Strategy<Value = ContentNode> {
    prop_oneof![
        ("[a-z ]{0,8}", 0u32..32)
            .prop_map(|(text, bits)| ContentNode::Text(TextNode::new(text, TextFormat::from_bits(bits)))),
        Just(ContentNode::LineBreak),
        Just(ContentNode::HorizontalRule { children: vec![] }),
    ]
}

fn node() -> impl Strategy<Value = ContentNode> {
    leaf().prop_recursive(4, 48, 4, |inner| {
        let children = prop::collection::vec(inner, 0..4);
        prop_oneof![
            children.clone().prop_map(|children| ContentNode::Paragraph { children }),
            (prop::option::of("h[0-9]{1,20}|[a-z]{0,3}"), children.clone())
                .prop_map(|(tag, children)| ContentNode::Heading { tag, children }),
            (any::<bool>(), children.clone()).prop_map(|(ordered, children)| ContentNode::List {
                list_type: if ordered { ListType::Number } else { ListType::Bullet },
                children,
            }),
            children.clone().prop_map(|children| ContentNode::ListItem { children }),
            children.clone().prop_map(|children| ContentNode::Quote { children }),
            children.clone().prop_map(|children| ContentNode::HorizontalRule { children }),
            (prop::option::of("[a-z]{1,4}"), children.clone())
                .prop_map(|(language, children)| ContentNode::Code { language, children }),
            (prop::option::of("https://[a-z]{1,6}\\.test"), any::<bool>(), children.clone())
                .prop_map(|(url, new_tab, children)| ContentNode::Link { url, new_tab, children }),
            ("[a-z-]{1,8}", children)
                .prop_map(|(kind, children)| ContentNode::Unknown { kind, children }),
        ]
    })
}

fn json_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        "[a-z]{0,6}".prop_map(Value::String),
        "h[0-9]{1,20}".prop_map(Value::String),
        prop::sample::select(vec!["root", "paragraph", "heading", "list", "link", "text"])
            .prop_map(|kind| json!({ "type": kind })),
    ];
    leaf.prop_recursive(4, 64, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::hash_map(
                prop::sample::select(vec![
                    "root", "type", "children", "text", "format", "tag", "url", "fields", "newTab"
                ]),
                inner,
                0..5
            )
            .prop_map(|map| {
                Value::Object(map.into_iter().map(|(k, v)| (k.to_string(), v)).collect())
            }),
        ]
    })
}

proptest! {
    #[test]
    fn text_flags_nest_in_bit_order(text in "[a-zA-Z0-9 ]{0,12}", mask in 0u32..32) {
        let node = TextNode::new(text.clone(), TextFormat::from_bits(mask));
        prop_assert_eq!(html_text(&node), expected_html(&text, mask));
        prop_assert_eq!(markdown_text(&node), expected_markdown(&text, mask));
    }

    #[test]
    fn legacy_markdown_passes_through(source in any::<String>()) {
        prop_assert_eq!(tree_to_markdown(&Content::markdown(source.clone())), source);
    }

    #[test]
    fn conversion_is_deterministic(children in prop::collection::vec(node(), 0..6)) {
        let content: Content = ContentTree::from_children(children).into();
        prop_assert_eq!(tree_to_markdown(&content), tree_to_markdown(&content.clone()));
        prop_assert_eq!(tree_to_html(&content), tree_to_html(&content.clone()));
    }

    #[test]
    fn any_json_converts_without_panicking(value in json_value()) {
        let content = Content::from_json(&value);
        let _ = tree_to_markdown(&content);
        let _ = tree_to_html(&content);
    }
}
