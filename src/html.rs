//! Conversion between HTML text and the document tree.
//!
//! Parsing goes through html5ever into an `RcDom`, whose `<body>` children are
//! copied into a [`Root`]. Serialization rebuilds an `RcDom` document from the
//! tree and hands it to the html5ever serializer, which owns all escaping.
//!
//! The tree keeps no namespaces. Elements under `<svg>` or `<math>` are put
//! back into their foreign namespace on the way out, and prefixed attributes
//! (`xlink:href`, `xml:lang`, `xmlns:xlink`) are stored under their qualified
//! name.

use std::cell::{Cell, RefCell};
use std::io;
use std::rc::Rc;

use html5ever::serialize::{SerializeOpts, serialize};
use html5ever::tendril::TendrilSink;
use html5ever::{
    Attribute, LocalName, Namespace, ParseOpts, Prefix, QualName, ns, parse_document,
};
use markup5ever_rcdom::{Handle, Node as DomNode, NodeData, RcDom, SerializableHandle};

use crate::syntax::{Comment, Element, Node, Root};

/// Parses an HTML fragment into a tree.
///
/// The input is parsed as a full document and the contents of the implied
/// `<body>` become the root's children.
pub fn parse_html(input: &str) -> Root {
    let dom = parse_document(RcDom::default(), ParseOpts::default()).one(input);

    let children = match find_body(&dom.document) {
        Some(body) => convert_children(&body),
        None => Vec::new(),
    };
    log::trace!("Parsed {} top-level node(s)", children.len());
    Root::new(children)
}

/// Serializes a tree back into HTML.
pub fn to_html(root: &Root) -> io::Result<String> {
    let document = create_node(NodeData::Document);
    for child in &root.children {
        document
            .children
            .borrow_mut()
            .push(build_handle(child, &ns!(html)));
    }

    let mut output = Vec::new();
    let serializable = SerializableHandle::from(document);
    serialize(&mut output, &serializable, SerializeOpts::default())?;

    String::from_utf8(output).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

fn find_body(document: &Handle) -> Option<Handle> {
    let html = find_element(document, "html")?;
    find_element(&html, "body")
}

fn find_element(parent: &Handle, tag: &str) -> Option<Handle> {
    parent
        .children
        .borrow()
        .iter()
        .find(|child| {
            matches!(&child.data, NodeData::Element { name, .. } if &*name.local == tag)
        })
        .cloned()
}

fn convert_children(handle: &Handle) -> Vec<Node> {
    handle
        .children
        .borrow()
        .iter()
        .filter_map(convert_node)
        .collect()
}

fn convert_node(handle: &Handle) -> Option<Node> {
    match &handle.data {
        NodeData::Text { contents } => Some(Node::text(contents.borrow().to_string())),
        NodeData::Element { name, attrs, .. } => {
            let properties = attrs
                .borrow()
                .iter()
                .map(|attr| (attribute_name(&attr.name), attr.value.to_string()))
                .collect();
            Some(Node::Element(Element {
                tag_name: name.local.to_string(),
                properties,
                children: convert_children(handle),
            }))
        }
        NodeData::Comment { contents } => Some(Node::Comment(Comment {
            value: contents.to_string(),
        })),
        // Doctypes and processing instructions cannot appear inside <body>.
        _ => None,
    }
}

fn attribute_name(name: &QualName) -> String {
    match &name.prefix {
        Some(prefix) => format!("{}:{}", prefix, name.local),
        None => name.local.to_string(),
    }
}

fn attribute_qual_name(name: &str) -> QualName {
    let foreign = name.split_once(':').and_then(|(prefix, local)| {
        let ns = match prefix {
            "xml" => ns!(xml),
            "xlink" => ns!(xlink),
            "xmlns" => ns!(xmlns),
            _ => return None,
        };
        Some(QualName::new(
            Some(Prefix::from(prefix)),
            ns,
            LocalName::from(local),
        ))
    });
    foreign.unwrap_or_else(|| QualName::new(None, ns!(), LocalName::from(name)))
}

fn element_namespace(tag_name: &str, parent: &Namespace) -> Namespace {
    match tag_name {
        "svg" => ns!(svg),
        "math" => ns!(mathml),
        _ => parent.clone(),
    }
}

fn build_handle(node: &Node, parent_ns: &Namespace) -> Handle {
    match node {
        Node::Text(text) => create_node(NodeData::Text {
            contents: RefCell::new(text.value.clone().into()),
        }),
        Node::Comment(comment) => create_node(NodeData::Comment {
            contents: comment.value.clone().into(),
        }),
        Node::Element(element) => {
            let attrs = element
                .properties
                .iter()
                .map(|(name, value)| Attribute {
                    name: attribute_qual_name(name),
                    value: value.to_string().into(),
                })
                .collect();
            let ns = element_namespace(&element.tag_name, parent_ns);
            // HTML integration point inside SVG.
            let children_ns = if ns == ns!(svg) && element.tag_name == "foreignObject" {
                ns!(html)
            } else {
                ns.clone()
            };
            let handle = create_node(NodeData::Element {
                name: QualName::new(None, ns, LocalName::from(element.tag_name.as_str())),
                attrs: RefCell::new(attrs),
                template_contents: Default::default(),
                mathml_annotation_xml_integration_point: false,
            });
            for child in &element.children {
                handle
                    .children
                    .borrow_mut()
                    .push(build_handle(child, &children_ns));
            }
            handle
        }
    }
}

fn create_node(data: NodeData) -> Handle {
    Rc::new(DomNode {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data,
    })
}
