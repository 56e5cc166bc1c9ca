//! Keyword rules used when the assistant is online.

use crate::types::Responder;
use async_trait::async_trait;

const WEATHER: &str = "Today's weather in Hyderabad will be partly cloudy. The temperature is expected to be around 31°C. Light showers are possible in the next 2 days. This is a good time for crop irrigation.";
const PEST_OR_DISEASE: &str = "Could you please specify the crop and the disease? For example, 'yellow rust in wheat' or 'blast disease in rice'.";
const RICE_BLAST: &str = "For Rice Blast disease, ensure the field is not overly fertilized with nitrogen. Maintain shallow water and consider spraying fungicides like Tricyclazole or Azoxystrobin after consulting a local expert.";
const RICE_FERTILIZER: &str = "For paddy, the general recommendation is 120:60:40 kg/ha of N:P:K. Apply phosphorus and potassium as a basal dose, and nitrogen in 3 split doses for better efficiency.";
const RICE_GENERAL: &str = "Rice is a major crop in this region. Are you asking about disease control, fertilizer management, or market price?";
const WHEAT_RUST: &str = "To control Yellow Rust in wheat, remove infected plants early. Avoid excessive irrigation. You can spray Propiconazole 25% EC at 1 ml/liter of water as a preventive measure.";
const WHEAT_SOWING: &str = "The ideal time for sowing wheat in the Hyderabad region is from the last week of October to the first week of November, when the temperature has cooled down.";
const WHEAT_GENERAL: &str = "For wheat, what information do you need? Sowing time, disease control, or irrigation schedule?";
const GRAIN_STORAGE: &str = "To store grains safely, ensure they are properly dried to a moisture content below 12%. Use clean, airtight containers or bags (like PICS bags) and store them in a cool, dry place away from pests. Using neem leaves can also help.";
const MARKET: &str = "Market prices fluctuate daily. For which crop are you asking the price? For example, 'market price for paddy'.";
const FERTILIZER: &str = "Fertilizer requirements depend heavily on the crop and soil health. For a detailed recommendation, please specify the crop and, if possible, the results of a recent soil test.";
const SOIL: &str = "Good soil health is vital. It's recommended to get your soil tested once every 2-3 years to check nutrient levels and pH. This helps in applying the right amount of fertilizers.";
const SOWING: &str = "In Hyderabad, September is a good time to prepare for the Rabi crop season. You can consider crops like Jowar, Maize, Bengal gram, and sunflower. Ensure the field is well-ploughed.";
const YIELD: &str = "To increase crop yield, focus on using high-quality certified seeds, ensuring balanced nutrition through soil testing, implementing proper irrigation techniques, and managing weeds and pests effectively.";

/// Answer when no rule matches.
pub const FALLBACK: &str = "I'm sorry, I couldn't find a specific answer for that. You can ask me about crop diseases, market prices, fertilizers, soil health, or what to plant.";

/// Subject of a query, in rule priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Weather,
    PestOrDisease,
    Rice,
    Wheat,
    GrainStorage,
    Market,
    Fertilizer,
    Soil,
    Sowing,
    Yield,
}

impl Topic {
    /// First topic whose keywords appear in the query.
    pub fn classify(query: &str) -> Option<Topic> {
        let has = |word: &str| query.contains(word);

        if has("weather") {
            Some(Topic::Weather)
        } else if has("pest") || has("disease") {
            Some(Topic::PestOrDisease)
        } else if has("rice") || has("paddy") {
            Some(Topic::Rice)
        } else if has("wheat") {
            Some(Topic::Wheat)
        } else if has("grain") && has("store") {
            Some(Topic::GrainStorage)
        } else if has("market") || has("price") {
            Some(Topic::Market)
        } else if has("fertilizer") || has("npk") || has("urea") {
            Some(Topic::Fertilizer)
        } else if has("soil") || has("ph") {
            Some(Topic::Soil)
        } else if has("sow") || has("plant") || has("season") {
            Some(Topic::Sowing)
        } else if has("yield") || has("increase") {
            Some(Topic::Yield)
        } else {
            None
        }
    }

    /// Answer for this topic; crop topics refine on further keywords.
    pub fn answer(self, query: &str) -> &'static str {
        let has = |word: &str| query.contains(word);

        match self {
            Topic::Weather => WEATHER,
            Topic::PestOrDisease => PEST_OR_DISEASE,
            Topic::Rice if has("blast") => RICE_BLAST,
            Topic::Rice if has("fertilizer") => RICE_FERTILIZER,
            Topic::Rice => RICE_GENERAL,
            Topic::Wheat if has("rust") => WHEAT_RUST,
            Topic::Wheat if has("sow") || has("season") => WHEAT_SOWING,
            Topic::Wheat => WHEAT_GENERAL,
            Topic::GrainStorage => GRAIN_STORAGE,
            Topic::Market => MARKET,
            Topic::Fertilizer => FERTILIZER,
            Topic::Soil => SOIL,
            Topic::Sowing => SOWING,
            Topic::Yield => YIELD,
        }
    }
}

/// Keyword rule chain for online mode.
#[derive(Debug, Default)]
pub struct OnlineResponder;

impl OnlineResponder {
    pub fn new() -> Self {
        Self
    }

    pub fn answer(query: &str) -> &'static str {
        Topic::classify(query)
            .map(|topic| topic.answer(query))
            .unwrap_or(FALLBACK)
    }
}

#[async_trait]
impl Responder for OnlineResponder {
    fn name(&self) -> &str {
        "online"
    }

    async fn respond(&self, query: &str) -> String {
        Self::answer(query).to_string()
    }
}
