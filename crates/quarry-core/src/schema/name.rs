use heck::{ToSnakeCase, ToUpperCamelCase};

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Name {
    pub parts: Vec<String>,
}

impl Name {
    pub fn new(src: &str) -> Self {
        let parts = src.to_snake_case().split('_').map(String::from).collect();
        Self { parts }
    }

    pub fn snake_case(&self) -> String {
        self.parts.join("_")
    }

    pub fn upper_camel_case(&self) -> String {
        self.snake_case().to_upper_camel_case()
    }

    /// The default table name for a model with this name
    pub fn table_name(&self) -> String {
        let Some((last, init)) = self.parts.split_last() else {
            return String::new();
        };

        let mut parts = init.to_vec();
        parts.push(pluralizer::pluralize(last, 2, false));
        parts.join("_")
    }
}
