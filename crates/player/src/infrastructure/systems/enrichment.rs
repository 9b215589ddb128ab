//! Enricher pass shared by system adapters
//!
//! Each registered enricher pattern is matched against the description. A
//! fragment that references a document is collapsed to a `@UUID[id]{label}`
//! marker so the later link rewrite stays the single place that renders
//! links. Fragments without a reference are substituted as HTML.

use std::ops::Range;
use std::sync::Arc;

use pde_domain::value_objects::{extract_data_uuid, unescape_ampersands, uuid_marker};

use crate::ports::outbound::{Enricher, EnricherMatch};

pub async fn enrich_description(description: &str, enrichers: &[Arc<dyn Enricher>]) -> String {
    let mut description = unescape_ampersands(description);

    for enricher in enrichers {
        let pattern = enricher.pattern();
        let matches: Vec<(Range<usize>, EnricherMatch)> = pattern
            .captures_iter(&description)
            .filter_map(|caps| Some((caps.get(0)?.range(), EnricherMatch::from_captures(&caps))))
            .collect();

        let mut enriched = String::with_capacity(description.len());
        let mut cursor = 0;
        for (span, found) in matches {
            if found.full.is_empty() {
                continue;
            }
            let Some(fragment) = enricher.enrich(&found).await else {
                tracing::debug!(matched = %found.full, "Enricher declined match");
                continue;
            };
            let replacement = match extract_data_uuid(&fragment) {
                Some(uuid) => uuid_marker(&uuid, found.label()),
                None => fragment,
            };
            enriched.push_str(&description[cursor..span.start]);
            enriched.push_str(&replacement);
            cursor = span.end;
        }
        enriched.push_str(&description[cursor..]);
        description = enriched;
    }

    description
}
