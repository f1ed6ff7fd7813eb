#![allow(clippy::panic_in_result_fn)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::indexing_slicing)]

use proptest::collection::vec;
use proptest::prelude::*;
use xmlrender::test_utils::*;

// Tag names that are always non-empty
fn tag_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,8}"
}

// Arbitrary printable text, including markup characters
fn text_strategy() -> impl Strategy<Value = String> {
    "[ -~]{0,40}"
}

fn leaf_strategy() -> impl Strategy<Value = Node> {
    prop_oneof![
        text_strategy().prop_map(Node::Text),
        tag_strategy().prop_map(|tag| Node::from(Element::new(tag))),
    ]
}

fn node_strategy() -> impl Strategy<Value = Node> {
    leaf_strategy().prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            (tag_strategy(), vec(inner.clone(), 0..4))
                .prop_map(|(tag, content)| Node::from(Element::new(tag).children(content))),
            vec(inner.clone(), 0..4).prop_map(|content| Node::from(Element::transparent().children(content))),
            vec(inner, 0..4).prop_map(Node::Group),
        ]
    })
}

proptest! {
    #[test]
    fn test_text_encoding(s in text_strategy()) {
        let out = render(&[Node::text(s.clone())]);

        prop_assert!(!out.contains('<'));
        prop_assert_eq!(out.matches("&lt;").count(), s.matches('<').count());
        prop_assert_eq!(out.matches('>').count(), s.matches('>').count());
        prop_assert_eq!(out.matches('"').count(), s.matches('"').count());
        prop_assert_eq!(out.replace("&lt;", "<").replace("&amp;", "&"), s);
    }

    #[test]
    fn test_attribute_encoding(s in text_strategy()) {
        let el = Element::new("x").attr("v", &s);
        let out = render_element(&el);
        let value = &out[r#"<x v=""#.len()..out.len() - r#""/>"#.len()];

        prop_assert!(!value.contains('"'));
        prop_assert!(!value.contains('<'));
        prop_assert_eq!(
            value.replace("&quot;", "\"").replace("&lt;", "<").replace("&amp;", "&"),
            s
        );
    }

    #[test]
    fn test_transparent_unwrapping(content in vec(node_strategy(), 0..6)) {
        let wrapped = Element::transparent().children(content.clone());
        prop_assert_eq!(render_element(&wrapped), render(&content));
    }

    #[test]
    fn test_group_is_concatenation(content in vec(node_strategy(), 0..6)) {
        let pieces: String = content.iter().map(|node| render(std::slice::from_ref(node))).collect();
        prop_assert_eq!(render(&[Node::Group(content)]), pieces);
    }

    #[test]
    fn test_self_closing(tag in tag_strategy()) {
        prop_assert_eq!(render_element(&Element::new(tag.clone())), format!("<{}/>", tag));
    }

    #[test]
    fn test_element_is_start_content_end(
        tag in tag_strategy(),
        id in text_strategy(),
        content in vec(node_strategy(), 1..4)
    ) {
        let el = Element::new(tag.clone()).attr("id", id).children(content.clone());
        // content that renders to nothing still opens and closes the tag
        let expected = format!("{}{}{}", start_tag(&el), render(&content), end_tag(&tag));
        prop_assert_eq!(render_element(&el), expected);
    }

    #[test]
    fn test_absent_attributes_never_render(name in "[a-z]{1,8}", tag in tag_strategy()) {
        let el = Element::new(tag.clone()).attr_opt(name, None::<String>);
        prop_assert_eq!(render_element(&el), format!("<{}/>", tag));
    }
}
