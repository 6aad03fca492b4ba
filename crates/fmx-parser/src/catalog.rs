use fmx_core::{
    CatalogError, CatalogGroup, CatalogNode, CatalogScript, ScriptStep, UNNAMED_GROUP,
    UNNAMED_SCRIPT,
};
use roxmltree::{Document, Node};

/// Parses a serialized catalog and builds the group/script tree rooted at the
/// first `ScriptCatalog` element found anywhere in the document.
///
/// Returns `Ok(None)` when the document parses but contains no
/// `ScriptCatalog` element; callers report that as a zero-script export.
pub fn parse_catalog(source: &str) -> Result<Option<CatalogGroup>, CatalogError> {
    let document = Document::parse(source)
        .map_err(|error| CatalogError::new("XML_PARSE_ERROR", error.to_string()))?;

    let Some(catalog_root) = document
        .descendants()
        .find(|node| node.is_element() && node.tag_name().name() == "ScriptCatalog")
    else {
        return Ok(None);
    };

    Ok(Some(parse_group(catalog_root)))
}

fn parse_group(node: Node<'_, '_>) -> CatalogGroup {
    let name = node
        .attribute("name")
        .unwrap_or(UNNAMED_GROUP)
        .to_string();

    let mut children = Vec::new();
    for child in node.children().filter(Node::is_element) {
        match child.tag_name().name() {
            "Group" => children.push(CatalogNode::Group(parse_group(child))),
            "Script" => children.push(CatalogNode::Script(parse_script(child))),
            _ => {}
        }
    }

    CatalogGroup { name, children }
}

fn parse_script(node: Node<'_, '_>) -> CatalogScript {
    let name = node
        .attribute("name")
        .unwrap_or(UNNAMED_SCRIPT)
        .to_string();

    // Steps are collected from all descendants in document order; catalogs
    // sometimes wrap them in intermediate container elements.
    let steps = node
        .descendants()
        .filter(|entry| entry.is_element() && entry.tag_name().name() == "Step")
        .map(parse_step)
        .collect();

    CatalogScript { name, steps }
}

fn parse_step(node: Node<'_, '_>) -> ScriptStep {
    let enabled = node
        .attribute("enable")
        .map(|value| !value.eq_ignore_ascii_case("false"))
        .unwrap_or(true);

    let text = node
        .descendants()
        .find(|entry| entry.is_element() && entry.tag_name().name() == "StepText")
        .map(text_content)
        .unwrap_or_default();

    ScriptStep {
        name: node.attribute("name").unwrap_or_default().to_string(),
        enabled,
        text,
    }
}

fn text_content(node: Node<'_, '_>) -> String {
    node.descendants()
        .filter(Node::is_text)
        .filter_map(|entry| entry.text())
        .collect()
}
