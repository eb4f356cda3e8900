use wasm_bindgen::JsValue;

pub type GreetingResult<T> = Result<T, GreetingError>;

#[derive(thiserror::Error, Debug)]
pub enum GreetingError {
    #[error("config error: {0}")]
    Config(String),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("dom error: {0}")]
    Dom(String),
}

impl GreetingError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn dom(msg: impl Into<String>) -> Self {
        Self::Dom(msg.into())
    }

    /// Wrap a value thrown by a browser API
    pub fn from_js(context: &str, value: JsValue) -> Self {
        Self::Dom(format!("{}: {:?}", context, value))
    }
}

impl From<GreetingError> for JsValue {
    fn from(err: GreetingError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
