//! Predefined answers available without connectivity.

use crate::types::Responder;
use async_trait::async_trait;

/// Answer when no predefined phrase matches.
pub const OFFLINE_NOTICE: &str = "I am currently in offline mode and can provide limited information. For more accurate information, please connect to the internet.";

/// A predefined phrase and its answer.
#[derive(Debug, Clone, Copy)]
pub struct OfflineEntry {
    pub query: &'static str,
    pub response: &'static str,
}

/// Checked in order; the first phrase contained in the query wins.
pub const OFFLINE_RESPONSES: &[OfflineEntry] = &[
    OfflineEntry {
        query: "yellow rust in wheat",
        response: "Yellow Rust is a fungal disease. To control it, spray Propiconazole 25% EC at a 0.1% solution (1 ml of medicine per liter of water).",
    },
    OfflineEntry {
        query: "tomato cultivation",
        response: "The suitable soil for tomato cultivation is loamy or sandy loam. Plant seedlings at a distance of 60 x 45 cm. Use a balanced amount of Nitrogen, Phosphorus, and Potash.",
    },
    OfflineEntry {
        query: "crop insurance",
        response: "You can get your crops insured under the Pradhan Mantri Fasal Bima Yojana (PMFBY). For this, contact your nearest bank or agriculture department office.",
    },
    OfflineEntry {
        query: "irrigation",
        response: "Drip irrigation and sprinkler irrigation are effective methods for water conservation. They save 30-50% of water and also increase crop yield.",
    },
    OfflineEntry {
        query: "organic farming",
        response: "In organic farming, natural methods are used instead of chemical fertilizers and pesticides. Organic manure, jeevamrut, and neem-based pesticides are effective alternatives.",
    },
    OfflineEntry {
        query: "soil test",
        response: "Soil testing is crucial for understanding nutrient deficiencies. Collect soil samples from different parts of your field and get them tested at a local agricultural center.",
    },
    OfflineEntry {
        query: "fertilizer",
        response: "NPK stands for Nitrogen (N), Phosphorus (P), and Potassium (K). The right ratio depends on your crop and soil health.",
    },
    OfflineEntry {
        query: "rice blast",
        response: "Rice blast is a serious fungal disease. Use disease-resistant varieties and ensure proper water management. Fungicides like Tricyclazole can be effective.",
    },
    OfflineEntry {
        query: "paddy",
        response: "For paddy, water management is key. Maintain 2-5 cm of water in the field after transplanting. Use a balanced dose of NPK fertilizers for best results.",
    },
];

#[derive(Debug, Default)]
pub struct OfflineResponder;

impl OfflineResponder {
    pub fn new() -> Self {
        Self
    }

    pub fn answer(query: &str) -> &'static str {
        OFFLINE_RESPONSES
            .iter()
            .find(|entry| query.contains(entry.query))
            .map(|entry| entry.response)
            .unwrap_or(OFFLINE_NOTICE)
    }
}

#[async_trait]
impl Responder for OfflineResponder {
    fn name(&self) -> &str {
        "offline"
    }

    async fn respond(&self, query: &str) -> String {
        Self::answer(query).to_string()
    }
}
