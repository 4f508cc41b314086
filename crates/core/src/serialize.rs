//! Rule-driven conversion of records into JSON objects.
//!
//! A record exposes its scalar columns plus whichever relationships were
//! loaded alongside it. Serialization walks those relationships and prunes
//! them with exclusion rules written as dotted paths:
//!
//! ```text
//! -appointments              drop the `appointments` key
//! -appointments.doctor_id    keep `appointments`, drop `doctor_id` inside each
//! -appointments.doctor       keep `appointments`, do not expand `doctor`
//! ```
//!
//! When descending into a relationship `f`, every rule `-f.rest` becomes
//! `-rest` for the child and the child's own [`Record::default_rules`] are
//! added. Records linked in both directions (doctor -> appointment -> doctor)
//! rely on those default rules to stop the expansion.

use serde::Serialize;
use serde_json::{Map, Value};

/// Parsed set of exclusion paths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rules {
    excluded: Vec<Vec<String>>,
}

impl Rules {
    /// Parse rules such as `"-appointments.doctor"`.
    ///
    /// Only exclusion rules (leading `-`) are understood; anything else is
    /// ignored, as are empty path segments.
    pub fn new<I, S>(rules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut parsed = Self::default();
        parsed.extend(rules);
        parsed
    }

    fn extend<I, S>(&mut self, rules: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for rule in rules {
            let Some(path) = rule.as_ref().trim().strip_prefix('-') else {
                continue;
            };
            let segments: Vec<String> = path
                .split('.')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
            if !segments.is_empty() && !self.excluded.contains(&segments) {
                self.excluded.push(segments);
            }
        }
    }

    /// A copy of these rules with `extra` added.
    pub fn with(&self, extra: &[&str]) -> Self {
        let mut merged = self.clone();
        merged.extend(extra);
        merged
    }

    /// Whether `field` is excluded at this level.
    pub fn excludes(&self, field: &str) -> bool {
        self.excluded
            .iter()
            .any(|path| path.len() == 1 && path[0] == field)
    }

    /// Rules that apply inside the relationship `field`.
    pub fn nested(&self, field: &str) -> Self {
        let excluded = self
            .excluded
            .iter()
            .filter(|path| path.len() > 1 && path[0] == field)
            .map(|path| path[1..].to_vec())
            .collect();
        Self { excluded }
    }

    pub fn is_empty(&self) -> bool {
        self.excluded.is_empty()
    }
}

/// A loaded relationship of a record.
pub enum Relation<'a> {
    One(&'a dyn Record),
    Many(Vec<&'a dyn Record>),
}

/// Something that can be turned into a JSON object under [`Rules`].
pub trait Record {
    /// Scalar columns of the record.
    fn fields(&self) -> Map<String, Value>;

    /// Relationships loaded alongside the record. Unloaded ones are absent.
    fn relations(&self) -> Vec<(&'static str, Relation<'_>)> {
        Vec::new()
    }

    /// Rules applied every time this record is serialized.
    fn default_rules(&self) -> &'static [&'static str] {
        &[]
    }

    /// Serialize with the given extra rules on top of the defaults.
    fn to_dict(&self, rules: &[&str]) -> Map<String, Value>
    where
        Self: Sized,
    {
        to_dict(self, &Rules::new(rules))
    }
}

/// Serialize `record` and its loaded relationships under `rules`.
pub fn to_dict(record: &dyn Record, rules: &Rules) -> Map<String, Value> {
    let rules = rules.with(record.default_rules());

    let mut out: Map<String, Value> = record
        .fields()
        .into_iter()
        .filter(|(key, _)| !rules.excludes(key))
        .collect();

    for (name, relation) in record.relations() {
        if rules.excludes(name) {
            continue;
        }
        let child = rules.nested(name);
        let value = match relation {
            Relation::One(related) => Value::Object(to_dict(related, &child)),
            Relation::Many(related) => Value::Array(
                related
                    .into_iter()
                    .map(|r| Value::Object(to_dict(r, &child)))
                    .collect(),
            ),
        };
        out.insert(name.to_string(), value);
    }

    out
}

/// Scalar columns of any `Serialize` struct, for [`Record::fields`].
pub fn columns_of<T: Serialize>(value: &T) -> Map<String, Value> {
    match serde_json::to_value(value) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[derive(Serialize)]
    struct Owner {
        id: i64,
        name: String,
    }

    #[derive(Serialize)]
    struct Pet {
        id: i64,
        owner_id: i64,
    }

    struct OwnerGraph {
        owner: Owner,
        pets: Vec<PetGraph>,
    }

    struct PetGraph {
        pet: Pet,
        owner: Option<Box<OwnerGraph>>,
    }

    impl Record for OwnerGraph {
        fn fields(&self) -> Map<String, Value> {
            columns_of(&self.owner)
        }

        fn relations(&self) -> Vec<(&'static str, Relation<'_>)> {
            vec![(
                "pets",
                Relation::Many(self.pets.iter().map(|p| p as &dyn Record).collect()),
            )]
        }

        fn default_rules(&self) -> &'static [&'static str] {
            &["-pets.owner"]
        }
    }

    impl Record for PetGraph {
        fn fields(&self) -> Map<String, Value> {
            columns_of(&self.pet)
        }

        fn relations(&self) -> Vec<(&'static str, Relation<'_>)> {
            match &self.owner {
                Some(owner) => vec![("owner", Relation::One(owner.as_ref()))],
                None => Vec::new(),
            }
        }
    }

    fn sample() -> OwnerGraph {
        let back_reference = OwnerGraph {
            owner: Owner {
                id: 1,
                name: "Ann".into(),
            },
            pets: Vec::new(),
        };
        OwnerGraph {
            owner: Owner {
                id: 1,
                name: "Ann".into(),
            },
            pets: vec![PetGraph {
                pet: Pet { id: 7, owner_id: 1 },
                owner: Some(Box::new(back_reference)),
            }],
        }
    }

    #[test]
    fn parses_only_exclusion_rules() {
        let rules = Rules::new(["-a", "b", "-a.b.c", "-", "  -d  ", "-a"]);
        assert!(rules.excludes("a"));
        assert!(!rules.excludes("b"));
        assert!(rules.excludes("d"));
        assert!(rules.nested("a").nested("b").excludes("c"));
        assert_eq!(rules.nested("a").nested("b").nested("c"), Rules::default());
    }

    #[test]
    fn default_rules_stop_back_reference() {
        let dict = sample().to_dict(&[]);
        assert_eq!(
            Value::Object(dict),
            json!({"id": 1, "name": "Ann", "pets": [{"id": 7, "owner_id": 1}]})
        );
    }

    #[test]
    fn top_level_exclusion_drops_relationship() {
        let dict = sample().to_dict(&["-pets"]);
        assert!(!dict.contains_key("pets"));
        assert_eq!(dict["name"], "Ann");
    }

    #[test]
    fn nested_exclusion_strips_child_columns() {
        let dict = sample().to_dict(&["-pets.owner_id"]);
        assert_eq!(dict["pets"], json!([{"id": 7}]));
    }

    #[test]
    fn scalar_exclusion_at_top_level() {
        let dict = sample().to_dict(&["-name"]);
        assert!(!dict.contains_key("name"));
        assert_eq!(dict["id"], 1);
    }

    #[test]
    fn without_defaults_the_back_reference_expands_once() {
        let graph = sample();
        let pet = &graph.pets[0];
        let dict = to_dict(pet, &Rules::default());
        assert_eq!(dict["owner"], json!({"id": 1, "name": "Ann", "pets": []}));
    }
}
