use serde::{Deserialize, Serialize};

/// One entry in the herbal reference dataset.
///
/// Field names on the wire are the dataset's original Chinese column names.
/// `name` doubles as the store's primary key and is unique across the whole
/// collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Herb {
    /// Chinese name, primary key.
    #[serde(rename = "中文名")]
    pub name: String,

    /// English / foreign-language names, in dataset order. May be empty.
    #[serde(rename = "英文名", default)]
    pub english_names: Vec<String>,

    /// Free-text description.
    #[serde(rename = "說明", default)]
    pub description: String,

    /// Link to the official standard document, if one exists.
    #[serde(rename = "標準網址", default)]
    pub standard_url: Option<String>,
}

impl Herb {
    /// Search predicate used by the lookup UI: the Chinese name matches on a
    /// verbatim substring, English names match case-insensitively. An empty
    /// query matches everything.
    pub fn matches(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        if self.name.contains(query) {
            return true;
        }
        let query = query.to_lowercase();
        self.english_names
            .iter()
            .any(|e| e.to_lowercase().contains(&query))
    }
}

/// Filter a herb list down to the entries matching `query`.
pub fn filter<'a>(herbs: &'a [Herb], query: &str) -> Vec<&'a Herb> {
    herbs.iter().filter(|h| h.matches(query)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ginseng() -> Herb {
        Herb {
            name: "人參".to_string(),
            english_names: vec!["Ginseng".to_string(), "Asian ginseng".to_string()],
            description: "補氣固脫".to_string(),
            standard_url: None,
        }
    }

    #[test]
    fn test_parses_original_wire_format() {
        let json = r#"[{"中文名":"人參","英文名":["Ginseng","Asian ginseng"],"說明":"補氣固脫","標準網址":null}]"#;
        let herbs: Vec<Herb> = serde_json::from_str(json).unwrap();
        assert_eq!(herbs.len(), 1);
        assert_eq!(herbs[0].name, "人參");
        assert_eq!(herbs[0].english_names, vec!["Ginseng", "Asian ginseng"]);
        assert_eq!(herbs[0].description, "補氣固脫");
        assert!(herbs[0].standard_url.is_none());
    }

    #[test]
    fn test_matches_chinese_substring() {
        assert!(ginseng().matches("人"));
        assert!(!ginseng().matches("黃耆"));
    }

    #[test]
    fn test_matches_english_ignores_case() {
        assert!(ginseng().matches("ginseng"));
        assert!(ginseng().matches("ASIAN"));
        assert!(!ginseng().matches("licorice"));
    }

    #[test]
    fn test_empty_query_matches_everything() {
        assert!(ginseng().matches(""));
    }

    #[test]
    fn test_filter_keeps_dataset_order() {
        let licorice = Herb {
            name: "甘草".to_string(),
            english_names: vec!["Licorice".to_string()],
            description: String::new(),
            standard_url: None,
        };
        let herbs = vec![ginseng(), licorice.clone()];

        let hits = filter(&herbs, "n");
        assert_eq!(hits, vec![&herbs[0]]);

        let all = filter(&herbs, "");
        assert_eq!(all.len(), 2);
        assert_eq!(all[1], &licorice);
    }
}
