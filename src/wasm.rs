// WebAssembly bindings for a web or mobile front end
use crate::config::Config;
use crate::controller::ConverterForm;
use crate::request::{ConversionRequest, Converter};
use crate::units::{TimeTable, Unit, UnitCategory};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct UnitConverterWasm {
    config: Config,
}

impl Default for UnitConverterWasm {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl UnitConverterWasm {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            config: Config::empty(),
        }
    }

    /// Create from config file contents (TOML)
    #[wasm_bindgen]
    pub fn with_config(config_content: &str) -> Result<UnitConverterWasm, JsValue> {
        let config = Config::load_from_str(config_content)
            .map_err(|e| JsValue::from_str(&format!("Failed to load config: {}", e)))?;
        Ok(Self { config })
    }

    /// Convert `value` and return the display string
    #[wasm_bindgen]
    pub fn convert(
        &self,
        category: Option<String>,
        value: f64,
        from: &str,
        to: &str,
    ) -> Result<String, JsValue> {
        let request = ConversionRequest::from_names(category.as_deref(), value, from, to)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        Ok(self.converter().convert(&request).rendered)
    }

    /// Same as `convert` but returns the full result as JSON
    #[wasm_bindgen]
    pub fn convert_json(
        &self,
        category: Option<String>,
        value: f64,
        from: &str,
        to: &str,
    ) -> Result<String, JsValue> {
        let request = ConversionRequest::from_names(category.as_deref(), value, from, to)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        serde_json::to_string(&self.converter().convert(&request))
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize result: {}", e)))
    }

    /// JSON array of category names
    #[wasm_bindgen]
    pub fn categories(&self) -> Result<String, JsValue> {
        serde_json::to_string(&UnitCategory::ALL)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize categories: {}", e)))
    }

    /// JSON array of unit names for one category
    #[wasm_bindgen]
    pub fn units(&self, category: &str) -> Result<String, JsValue> {
        let category: UnitCategory = category
            .parse()
            .map_err(|e: crate::units::UnitError| JsValue::from_str(&e.to_string()))?;

        serde_json::to_string(&Unit::all_in(category))
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize units: {}", e)))
    }

    /// Summary line of a form screen with its default selection
    #[wasm_bindgen]
    pub fn summary(&self, category: &str, value: f64) -> Result<String, JsValue> {
        let category: UnitCategory = category
            .parse()
            .map_err(|e: crate::units::UnitError| JsValue::from_str(&e.to_string()))?;

        let mut form = ConverterForm::with_config(&self.config);
        form.select_category(category);
        form.set_input(value);
        Ok(form.summary())
    }

    /// Name of the active time table ("legacy" or "consistent")
    #[wasm_bindgen]
    pub fn time_table(&self) -> String {
        self.config.time_table.name().to_string()
    }

    /// Switch time tables at runtime
    #[wasm_bindgen]
    pub fn set_time_table(&mut self, table: &str) -> Result<(), JsValue> {
        self.config.time_table = table
            .parse::<TimeTable>()
            .map_err(|e| JsValue::from_str(&e))?;
        Ok(())
    }
}

impl UnitConverterWasm {
    fn converter(&self) -> Converter {
        Converter::new(self.config.time_table)
    }
}
