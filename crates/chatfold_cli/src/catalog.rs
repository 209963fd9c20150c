//! Demo capability catalog: a product-presentation assistant.
//!
//! Components are rendered by a front-end; the two tools return canned data
//! after a short delay so spinners and pending labels have something to show.

use std::time::Duration;

use async_trait::async_trait;
use chatfold_core::{schema, CapabilityRegistry, ChildrenPolicy, ComponentCapability, ToolHandler, ToolResult};
use serde_json::{json, Value as JsonValue};

/// Simulated backend latency for the demo tools.
pub const DEMO_TOOL_DELAY: Duration = Duration::from_secs(1);

const PRESENTATION_DRAFT_DESCRIPTION: &str = "A UI component that shows a draft to create or update a \
presentation with products. It can be a new presentation or one from the list of suggested \
presentations. Ask the user which presentation to use; do not pick one yourself. When creating a \
new presentation, make sure you know its name, and ask for it if you do not.";

pub fn demo_registry() -> chatfold_core::Result<CapabilityRegistry> {
    let mut registry = CapabilityRegistry::new();

    registry.register_component(
        ComponentCapability::new("markdown", "Show markdown to the user").with_input(schema::object(
            "Markdown input",
            [("data", schema::streaming_string("The markdown content"))],
        )),
    )?;
    registry.register_component(
        ComponentCapability::new("card", "Show a card to the user.").with_children(ChildrenPolicy::Any),
    )?;
    registry.register_component(
        ComponentCapability::new("presentation_draft", PRESENTATION_DRAFT_DESCRIPTION).with_input(schema::object(
            "Presentation draft input",
            [
                (
                    "presentationId",
                    schema::string("An id of the existing presentation, if it exists already."),
                ),
                (
                    "presentationName",
                    schema::string("The name of the presentation to create or add products to"),
                ),
                (
                    "products",
                    schema::array(
                        "The list of products to be added (if any).",
                        schema::object(
                            "The product item",
                            [
                                ("id", schema::number("An id of a product")),
                                ("name", schema::string("The name of a product")),
                            ],
                        ),
                    ),
                ),
                (
                    "mode",
                    schema::enumeration(
                        "Whether the draft creates a presentation with products or adds products to an existing one",
                        &["createWithProducts", "addProducts"],
                    ),
                ),
            ],
        )),
    )?;

    registry.register_tool(GetPresentationList { delay: DEMO_TOOL_DELAY })?;
    registry.register_tool(SearchProducts { delay: DEMO_TOOL_DELAY })?;
    Ok(registry)
}

pub struct GetPresentationList {
    pub delay: Duration,
}

#[async_trait]
impl ToolHandler for GetPresentationList {
    fn name(&self) -> &str {
        "getPresentationList"
    }

    fn description(&self) -> &str {
        "Retrieves the list of existing presentations"
    }

    fn parameters_schema(&self) -> JsonValue {
        schema::empty()
    }

    async fn execute(&self, _args: JsonValue) -> ToolResult {
        tokio::time::sleep(self.delay).await;
        Ok(json!({
            "presentations": [
                { "id": 1, "name": "My mugs" },
                { "id": 2, "name": "Umbrella collection" },
                { "id": 3, "name": "test presentation" },
                { "id": 4, "name": "party gifts" },
                { "id": 5, "name": "pens and pencils" },
            ]
        }))
    }
}

pub struct SearchProducts {
    pub delay: Duration,
}

#[async_trait]
impl ToolHandler for SearchProducts {
    fn name(&self) -> &str {
        "searchProducts"
    }

    fn description(&self) -> &str {
        "The method to search products. Returns the list of top 5 matches for the given search term."
    }

    fn parameters_schema(&self) -> JsonValue {
        schema::object(
            "Product search input",
            [("term", schema::string("The search term to find the product"))],
        )
    }

    async fn execute(&self, args: JsonValue) -> ToolResult {
        let term = args
            .get("term")
            .and_then(JsonValue::as_str)
            .ok_or_else(|| anyhow::anyhow!("missing required argument: term"))?;
        tracing::debug!(term, "searching products");
        tokio::time::sleep(self.delay).await;
        // canned top-5 regardless of term
        Ok(json!({
            "products": [
                { "ProductId": 6904597, "Name": "Crimson Blaze Coffee Mug" },
                { "ProductId": 552956052, "Name": "Scarlet Heat Insulated Mug" },
                { "ProductId": 552421970, "Name": "Cherry Red Enamel Coffee Cup" },
                { "ProductId": 552602376, "Name": "Ruby Red Jumbo Mug" },
                { "ProductId": 552468001, "Name": "Carmine Copper Insulated Travel Mug" },
            ],
            "total": 11100,
        }))
    }
}
