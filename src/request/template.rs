//! Parameter extraction and request URL construction
//!
//! A path template such as `/api/downloader/youtube?url=&apikey=YOUR_API_KEY`
//! declares its user-fillable parameters in the query string: every key whose
//! value is empty or the sentinel `YOUR_API_KEY` becomes a required field.
//! Keys with any other value are documentation only: the request URL is the
//! path without its query plus the values entered in the form.

use url::form_urlencoded;

/// Template value marking a required field whose real value is unknown to the catalog author
pub const API_KEY_SENTINEL: &str = "YOUR_API_KEY";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    String,
    Number,
}

impl ParamType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamType::String => "string",
            ParamType::Number => "number",
        }
    }
}

/// A user-fillable field derived from a path template
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub required: bool,
    pub param_type: ParamType,
    pub description: String,
}

impl Parameter {
    fn required(name: &str) -> Self {
        let (param_type, description) = describe(name);
        Self {
            name: name.to_string(),
            required: true,
            param_type,
            description,
        }
    }
}

/// Type and placeholder text for well-known parameter names
fn describe(name: &str) -> (ParamType, String) {
    let known = match name {
        "apikey" => Some((ParamType::String, "Your API key for authentication")),
        "url" => Some((ParamType::String, "URL of the content to download/process")),
        "question" => Some((ParamType::String, "Question or message to ask the AI")),
        "query" => Some((ParamType::String, "Search query or keywords")),
        "prompt" => Some((ParamType::String, "Text description for image generation")),
        "format" => Some((ParamType::String, "Output format (mp4, mp3, jpg, png)")),
        "quality" => Some((ParamType::String, "Video quality (360p, 720p, 1080p)")),
        "size" => Some((ParamType::String, "Image dimensions (512x512, 1024x1024)")),
        "limit" => Some((ParamType::Number, "Number of results to return")),
        _ => None,
    };

    match known {
        Some((param_type, description)) => (param_type, description.to_string()),
        None => (ParamType::String, name.to_string()),
    }
}

/// Parsed form of an endpoint path template
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RequestTemplate {
    /// Path with the query string removed
    pub base_path: String,
    /// Required parameters in template order
    pub parameters: Vec<Parameter>,
}

impl RequestTemplate {
    pub fn parse(path: &str) -> Self {
        let base_path = path.split_once('?').map_or(path, |(base, _)| base);

        Self {
            base_path: base_path.to_string(),
            parameters: extract_parameters(path),
        }
    }

    /// Build the request URL from the current field values.
    ///
    /// Every field is checked; all empty required fields are reported, not
    /// only the first one.
    pub fn build(&self, values: &FieldValues) -> BuiltUrl {
        let mut query = form_urlencoded::Serializer::new(String::new());
        let mut invalid_fields = Vec::new();

        for param in &self.parameters {
            let value = values.get(&param.name).unwrap_or("").trim();

            if param.required && value.is_empty() {
                invalid_fields.push(param.name.clone());
            }

            if !value.is_empty() {
                query.append_pair(&param.name, value);
            }
        }

        let query = query.finish();
        let url = if query.is_empty() {
            self.base_path.clone()
        } else {
            format!("{}?{}", self.base_path, query)
        };

        BuiltUrl {
            url,
            has_errors: !invalid_fields.is_empty(),
            invalid_fields,
        }
    }
}

/// Required parameters declared by a path template, in template order
pub fn extract_parameters(path: &str) -> Vec<Parameter> {
    let Some((_, query)) = path.split_once('?') else {
        return Vec::new();
    };

    let mut parameters: Vec<Parameter> = Vec::new();
    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        let placeholder = value.is_empty() || value == API_KEY_SENTINEL;
        // first declaration wins
        if placeholder && !parameters.iter().any(|p| p.name == key) {
            parameters.push(Parameter::required(&key));
        }
    }
    parameters
}

/// Result of a URL build
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltUrl {
    pub url: String,
    pub has_errors: bool,
    /// Required fields that were empty after trimming, in declaration order
    pub invalid_fields: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldValue {
    pub name: String,
    pub value: String,
}

/// Values typed by the user into one panel's parameter form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldValues {
    values: Vec<FieldValue>,
}

impl FieldValues {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|v| v.name == name)
            .map(|v| v.value.as_str())
    }

    /// Insert or update a value
    pub fn set(&mut self, name: &str, value: String) {
        if let Some(existing) = self.values.iter_mut().find(|v| v.name == name) {
            existing.value = value;
        } else {
            self.values.push(FieldValue {
                name: name.to_string(),
                value,
            });
        }
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FieldValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut values = FieldValues::default();
        for (k, v) in iter {
            values.set(&k.into(), v.into());
        }
        values
    }
}

/// Prefix a catalog-relative URL with the server origin; absolute URLs pass through
pub fn qualify_url(origin: &str, url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        return url.to_string();
    }

    let origin = origin.trim_end_matches('/');
    if url.starts_with('/') {
        format!("{origin}{url}")
    } else {
        format!("{origin}/{url}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const YOUTUBE: &str = "/api/downloader/youtube?url=&apikey=";

    fn names(params: &[Parameter]) -> Vec<&str> {
        params.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_extract_no_query() {
        assert!(extract_parameters("/api/random/anime").is_empty());
        assert!(extract_parameters("/api/random/anime?").is_empty());
    }

    #[test]
    fn test_extract_empty_and_sentinel_in_order() {
        let params = extract_parameters("/api/x?prompt=&lang=en&apikey=YOUR_API_KEY&size=");
        assert_eq!(names(&params), vec!["prompt", "apikey", "size"]);
        assert!(params.iter().all(|p| p.required));
    }

    #[test]
    fn test_extract_scenario_youtube() {
        let params = extract_parameters(YOUTUBE);
        assert_eq!(names(&params), vec!["url", "apikey"]);
        assert!(params[0].required && params[1].required);
    }

    #[test]
    fn test_extract_types_and_descriptions() {
        let params = extract_parameters("/api/x?limit=&apikey=&custom_field=");
        assert_eq!(params[0].param_type, ParamType::Number);
        assert_eq!(params[0].description, "Number of results to return");
        assert_eq!(params[1].param_type, ParamType::String);
        assert_eq!(params[1].description, "Your API key for authentication");
        assert_eq!(params[2].param_type, ParamType::String);
        assert_eq!(params[2].description, "custom_field");
    }

    #[test]
    fn test_extract_duplicate_names_keep_first() {
        let params = extract_parameters("/api/x?url=&url=&apikey=");
        assert_eq!(names(&params), vec!["url", "apikey"]);
    }

    #[test]
    fn test_concrete_pairs_are_not_parameters() {
        let template = RequestTemplate::parse("/api/quote?lang=en&apikey=");
        assert_eq!(template.base_path, "/api/quote");
        assert_eq!(names(&template.parameters), vec!["apikey"]);
    }

    #[test]
    fn test_build_scenario_missing_apikey() {
        let template = RequestTemplate::parse(YOUTUBE);
        let values: FieldValues = [("url", "https://x"), ("apikey", "")].into_iter().collect();

        let built = template.build(&values);
        assert!(built.has_errors);
        assert_eq!(built.invalid_fields, vec!["apikey".to_string()]);
        assert_eq!(built.url, "/api/downloader/youtube?url=https%3A%2F%2Fx");
    }

    #[test]
    fn test_build_scenario_all_filled() {
        let template = RequestTemplate::parse(YOUTUBE);
        let values: FieldValues = [("url", "https://x"), ("apikey", "abc123")]
            .into_iter()
            .collect();

        let built = template.build(&values);
        assert!(!built.has_errors);
        assert!(built.invalid_fields.is_empty());
        assert_eq!(
            built.url,
            "/api/downloader/youtube?url=https%3A%2F%2Fx&apikey=abc123"
        );
    }

    #[test]
    fn test_build_collects_all_errors() {
        let template = RequestTemplate::parse(YOUTUBE);
        let built = template.build(&FieldValues::default());
        assert!(built.has_errors);
        assert_eq!(
            built.invalid_fields,
            vec!["url".to_string(), "apikey".to_string()]
        );
        assert_eq!(built.url, "/api/downloader/youtube");
    }

    #[test]
    fn test_build_trims_and_omits_blank_values() {
        let template = RequestTemplate::parse("/api/search?query=&limit=");
        let values: FieldValues = [("query", "  hello world "), ("limit", "   ")]
            .into_iter()
            .collect();

        let built = template.build(&values);
        assert_eq!(built.url, "/api/search?query=hello+world");
        assert_eq!(built.invalid_fields, vec!["limit".to_string()]);
    }

    #[test]
    fn test_build_preserves_declaration_order() {
        let template = RequestTemplate::parse("/api/x?b=&a=");
        // values entered in the opposite order
        let values: FieldValues = [("a", "1"), ("b", "2")].into_iter().collect();
        assert_eq!(template.build(&values).url, "/api/x?b=2&a=1");
    }

    #[test]
    fn test_build_without_parameters_is_base_path() {
        let template = RequestTemplate::parse("/api/random/anime");
        let built = template.build(&FieldValues::default());
        assert_eq!(built.url, "/api/random/anime");
        assert!(!built.url.contains('?'));
        assert!(!built.has_errors);
    }

    #[test]
    fn test_build_drops_concrete_template_pairs() {
        let template = RequestTemplate::parse("/api/random/quote?lang=en");
        assert!(template.parameters.is_empty());
        assert_eq!(
            template.build(&FieldValues::default()).url,
            "/api/random/quote"
        );

        let template = RequestTemplate::parse("/api/quote?lang=en&apikey=");
        let values: FieldValues = [("apikey", "k")].into_iter().collect();
        assert_eq!(template.build(&values).url, "/api/quote?apikey=k");
    }

    #[test]
    fn test_field_values_set_and_clear() {
        let mut values = FieldValues::default();
        assert!(values.is_empty());

        values.set("url", "a".to_string());
        values.set("url", "b".to_string());
        assert_eq!(values.get("url"), Some("b"));
        assert!(!values.is_empty());

        values.clear();
        assert_eq!(values.get("url"), None);
    }

    #[test]
    fn test_qualify_url() {
        assert_eq!(
            qualify_url("http://localhost:3000/", "/api/x?a=1"),
            "http://localhost:3000/api/x?a=1"
        );
        assert_eq!(
            qualify_url("http://localhost:3000", "api/x"),
            "http://localhost:3000/api/x"
        );
        assert_eq!(
            qualify_url("http://localhost:3000", "https://other.example/x"),
            "https://other.example/x"
        );
    }
}
