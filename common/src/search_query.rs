//! Shared search query model, its URL query-string codec and the recipe
//! predicate.
//!
//! Every field is optional and an absent field places no constraint on the
//! results. Trivial values (empty keyword, empty sets, unbounded ranges) are
//! never written to the URL, so the default query encodes to an empty string.

use std::{collections::BTreeSet, fmt::Display};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{duration_range::DurationRange, recipe::Recipe};

pub const KEYWORD_KEY: &str = "kw";
pub const GENRE_KEY: &str = "g";
pub const KIND_KEY: &str = "k";
pub const DIFFICULTY_KEY: &str = "d";
pub const COOK_DURATION_KEY: &str = "cd";
pub const PREP_DURATION_KEY: &str = "pd";
pub const INGREDIENTS_KEY: &str = "i";
pub const EXCLUDE_INGREDIENTS_KEY: &str = "ei";

const LIST_SEPARATOR: char = ',';
const GROUP_SEPARATOR: char = '|';

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SearchQuery {
    pub keyword: Option<String>,
    pub genre: Option<BTreeSet<String>>,
    pub kind: Option<BTreeSet<String>>,
    pub difficulty: Option<BTreeSet<String>>,
    pub cook_duration: Option<DurationRange>,
    pub prep_duration: Option<DurationRange>,
    /// AND across groups, OR inside a group.
    pub ingredients: Option<Vec<BTreeSet<String>>>,
    pub exclude_ingredients: Option<BTreeSet<String>>,
}

/// Set-valued fields edited with checkboxes or chips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SetField {
    Genre,
    Kind,
    Difficulty,
    ExcludeIngredients,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DurationField {
    Cook,
    Prep,
}

impl SearchQuery {
    /// Decodes a URL query string. A leading `?` is accepted, unknown keys are
    /// ignored and keys with an empty value leave the field absent.
    pub fn deserialize(query_string: &str) -> Self {
        let query_string = query_string.strip_prefix('?').unwrap_or(query_string);
        let mut query = Self::default();
        for (key, value) in form_urlencoded::parse(query_string.as_bytes()) {
            match key.as_ref() {
                KEYWORD_KEY => query.keyword = Some(value.into_owned()).filter(|v| !v.is_empty()),
                GENRE_KEY => query.genre = split_list(&value),
                KIND_KEY => query.kind = split_list(&value),
                DIFFICULTY_KEY => query.difficulty = split_list(&value),
                COOK_DURATION_KEY => query.cook_duration = decode_duration(COOK_DURATION_KEY, &value),
                PREP_DURATION_KEY => query.prep_duration = decode_duration(PREP_DURATION_KEY, &value),
                INGREDIENTS_KEY => query.ingredients = split_groups(&value),
                EXCLUDE_INGREDIENTS_KEY => query.exclude_ingredients = split_list(&value),
                _ => {}
            }
        }
        query
    }

    /// Encodes the non-trivial fields in the fixed order `kw g k d cd pd i ei`.
    pub fn serialize(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        if let Some(keyword) = self.keyword.as_deref().filter(|k| !k.is_empty()) {
            serializer.append_pair(KEYWORD_KEY, keyword);
        }
        for (key, set) in [
            (GENRE_KEY, &self.genre),
            (KIND_KEY, &self.kind),
            (DIFFICULTY_KEY, &self.difficulty),
        ] {
            if let Some(joined) = join_list(set.as_ref()) {
                serializer.append_pair(key, &joined);
            }
        }
        for (key, range) in [
            (COOK_DURATION_KEY, &self.cook_duration),
            (PREP_DURATION_KEY, &self.prep_duration),
        ] {
            if let Some(range) = range.filter(|r| !r.is_unbounded()) {
                serializer.append_pair(key, &range.to_string());
            }
        }
        if let Some(joined) = join_groups(self.ingredients.as_deref()) {
            serializer.append_pair(INGREDIENTS_KEY, &joined);
        }
        if let Some(joined) = join_list(self.exclude_ingredients.as_ref()) {
            serializer.append_pair(EXCLUDE_INGREDIENTS_KEY, &joined);
        }
        serializer.finish()
    }

    /// One-line summary shown above the results, e.g.
    /// `ジャンル：和風・洋風 加熱時間：10～30分 材料：(卵 or 牛乳)・砂糖`.
    pub fn describe(&self) -> String {
        let mut parts = Vec::new();
        if let Some(keyword) = self.keyword.as_deref().filter(|k| !k.is_empty()) {
            parts.push(format!("キーワード：{keyword}"));
        }
        for (label, set) in [
            ("ジャンル", &self.genre),
            ("種類", &self.kind),
            ("難易度", &self.difficulty),
        ] {
            if let Some(set) = set.as_ref().filter(|s| !s.is_empty()) {
                parts.push(format!("{label}：{}", join_display(set)));
            }
        }
        for (label, range) in [("加熱時間", &self.cook_duration), ("準備時間", &self.prep_duration)] {
            if let Some(range) = range.filter(|r| !r.is_unbounded()) {
                parts.push(format!("{label}：{}", range.describe()));
            }
        }
        if let Some(groups) = self.ingredients.as_ref() {
            let groups = groups
                .iter()
                .filter(|g| !g.is_empty())
                .map(|group| {
                    let names = group.iter().map(String::as_str).collect::<Vec<_>>().join(" or ");
                    if group.len() > 1 { format!("({names})") } else { names }
                })
                .collect::<Vec<_>>();
            if !groups.is_empty() {
                parts.push(format!("材料：{}", groups.join("・")));
            }
        }
        if let Some(set) = self.exclude_ingredients.as_ref().filter(|s| !s.is_empty()) {
            parts.push(format!("除外：{}", join_display(set)));
        }
        parts.join(" ")
    }

    /// Conjunction of every present constraint.
    pub fn matches(&self, recipe: &Recipe) -> bool {
        if let Some(keyword) = self.keyword.as_deref() {
            if !recipe.title.contains(keyword) && !recipe.comment.contains(keyword) {
                return false;
            }
        }
        if !in_set(self.difficulty.as_ref(), &recipe.difficulty)
            || !in_set(self.genre.as_ref(), &recipe.genre)
            || !in_set(self.kind.as_ref(), &recipe.kind)
        {
            return false;
        }
        if !self.cook_duration.is_none_or(|r| r.contains(i64::from(recipe.cook_duration))) {
            return false;
        }
        if !self.prep_duration.is_none_or(|r| r.contains(i64::from(recipe.prep_duration))) {
            return false;
        }

        let names = recipe.ingredient_names();
        if let Some(groups) = self.ingredients.as_ref() {
            // an empty group is no constraint, same as in the URL
            if !groups
                .iter()
                .filter(|group| !group.is_empty())
                .all(|group| group.iter().any(|n| names.contains(n.as_str())))
            {
                return false;
            }
        }
        if let Some(excluded) = self.exclude_ingredients.as_ref() {
            if excluded.iter().any(|n| names.contains(n.as_str())) {
                return false;
            }
        }
        true
    }

    /// Copy with every trivial field dropped; this is what a round trip
    /// through the URL yields.
    pub fn normalized(&self) -> Self {
        Self::deserialize(&self.serialize())
    }

    pub fn is_unconstrained(&self) -> bool {
        self.normalized() == Self::default()
    }

    pub fn set_field(&self, field: SetField) -> Option<&BTreeSet<String>> {
        match field {
            SetField::Genre => self.genre.as_ref(),
            SetField::Kind => self.kind.as_ref(),
            SetField::Difficulty => self.difficulty.as_ref(),
            SetField::ExcludeIngredients => self.exclude_ingredients.as_ref(),
        }
    }

    fn set_field_mut(&mut self, field: SetField) -> &mut Option<BTreeSet<String>> {
        match field {
            SetField::Genre => &mut self.genre,
            SetField::Kind => &mut self.kind,
            SetField::Difficulty => &mut self.difficulty,
            SetField::ExcludeIngredients => &mut self.exclude_ingredients,
        }
    }

    pub fn has_value(&self, field: SetField, value: &str) -> bool {
        self.set_field(field).is_some_and(|set| set.contains(value))
    }

    /// Adds or removes `value`; a set left empty collapses back to absent.
    pub fn toggle_value(&mut self, field: SetField, value: &str, on: bool) {
        let slot = self.set_field_mut(field);
        let set = slot.get_or_insert_with(BTreeSet::new);
        if on {
            set.insert(value.to_string());
        } else {
            set.remove(value);
        }
        if set.is_empty() {
            *slot = None;
        }
    }

    pub fn duration(&self, field: DurationField) -> Option<DurationRange> {
        match field {
            DurationField::Cook => self.cook_duration,
            DurationField::Prep => self.prep_duration,
        }
    }

    /// Stores `range`, or clears the field when both sides are open.
    pub fn set_duration(&mut self, field: DurationField, range: DurationRange) {
        let range = Some(range).filter(|r| !r.is_unbounded());
        match field {
            DurationField::Cook => self.cook_duration = range,
            DurationField::Prep => self.prep_duration = range,
        }
    }

    pub fn set_keyword(&mut self, keyword: &str) {
        self.keyword = Some(keyword.to_string()).filter(|k| !k.is_empty());
    }

    /// Adds `name` to OR-group `index`; `index == len` starts a new group.
    pub fn add_to_ingredient_group(&mut self, index: usize, name: &str) {
        let groups = self.ingredients.get_or_insert_with(Vec::new);
        match groups.get_mut(index) {
            Some(group) => {
                group.insert(name.to_string());
            }
            None => groups.push(BTreeSet::from([name.to_string()])),
        }
    }

    /// Removes `name` from OR-group `index`, dropping the group once empty and
    /// the whole field once no group is left.
    pub fn remove_from_ingredient_group(&mut self, index: usize, name: &str) {
        let Some(groups) = self.ingredients.as_mut() else { return };
        if let Some(group) = groups.get_mut(index) {
            group.remove(name);
            if group.is_empty() {
                groups.remove(index);
            }
        }
        if groups.is_empty() {
            self.ingredients = None;
        }
    }
}

fn in_set(set: Option<&BTreeSet<String>>, value: &str) -> bool {
    set.filter(|set| !set.is_empty()).is_none_or(|set| set.contains(value))
}

fn split_list(value: &str) -> Option<BTreeSet<String>> {
    let set = value
        .split(LIST_SEPARATOR)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>();
    Some(set).filter(|s| !s.is_empty())
}

fn split_groups(value: &str) -> Option<Vec<BTreeSet<String>>> {
    let groups = value
        .split(LIST_SEPARATOR)
        .filter_map(|clause| {
            let group = clause
                .split(GROUP_SEPARATOR)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect::<BTreeSet<_>>();
            Some(group).filter(|g| !g.is_empty())
        })
        .collect::<Vec<_>>();
    Some(groups).filter(|g| !g.is_empty())
}

fn decode_duration(key: &str, value: &str) -> Option<DurationRange> {
    match value.parse::<DurationRange>() {
        Ok(range) => Some(range).filter(|r| !r.is_unbounded()),
        Err(e) => {
            warn!("{key}: {e}, no recipe will match this range");
            Some(DurationRange::UNSATISFIABLE)
        }
    }
}

fn join_list(set: Option<&BTreeSet<String>>) -> Option<String> {
    let joined = set?
        .iter()
        .filter(|s| !s.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(",");
    Some(joined).filter(|j| !j.is_empty())
}

fn join_groups(groups: Option<&[BTreeSet<String>]>) -> Option<String> {
    let joined = groups?
        .iter()
        .filter_map(|group| {
            let names = group
                .iter()
                .filter(|s| !s.is_empty())
                .map(String::as_str)
                .collect::<Vec<_>>();
            (!names.is_empty()).then(|| names.join("|"))
        })
        .collect::<Vec<_>>()
        .join(",");
    Some(joined).filter(|j| !j.is_empty())
}

fn join_display(set: &BTreeSet<String>) -> String {
    set.iter().map(String::as_str).collect::<Vec<_>>().join("・")
}

impl Display for SearchQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.serialize())
    }
}

// Plain query string as it appears in a URL, see `deserialize`.
impl From<&str> for SearchQuery {
    fn from(query_string: &str) -> Self {
        Self::deserialize(query_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::Ingredient;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::{fixture, rstest};

    fn set(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[fixture]
    fn omelette() -> Recipe {
        Recipe {
            id: 1,
            title: "ふわふわオムレツ".to_string(),
            comment: "朝食にぴったりの一品。".to_string(),
            genre: "洋風".to_string(),
            kind: "主菜".to_string(),
            difficulty: "簡単".to_string(),
            prep_duration: 5,
            cook_duration: 10,
            calorie: 250,
            servings: 1,
            ingredients: vec![Ingredient::new("卵"), Ingredient::new("牛乳"), Ingredient::new("バター")],
            instructions: vec!["混ぜて焼く。".to_string()],
        }
    }

    #[test]
    fn empty_string_decodes_to_default() {
        assert_eq!(SearchQuery::deserialize(""), SearchQuery::default());
        assert_eq!(SearchQuery::deserialize("?"), SearchQuery::default());
        assert_eq!(SearchQuery::default().serialize(), "");
    }

    #[test]
    fn decodes_every_key() {
        let query = SearchQuery::deserialize("kw=%E3%82%AB%E3%83%AC%E3%83%BC&g=和風,洋風&k=主菜&d=簡単&cd=10-30&pd=-15&i=卵|牛乳,砂糖&ei=小麦粉");
        assert_eq!(
            query,
            SearchQuery {
                keyword: Some("カレー".to_string()),
                genre: Some(set(&["和風", "洋風"])),
                kind: Some(set(&["主菜"])),
                difficulty: Some(set(&["簡単"])),
                cook_duration: Some(DurationRange::between(10, 30)),
                prep_duration: Some(DurationRange::at_most(15)),
                ingredients: Some(vec![set(&["卵", "牛乳"]), set(&["砂糖"])]),
                exclude_ingredients: Some(set(&["小麦粉"])),
            }
        );
    }

    #[rstest]
    #[case("kw=")]
    #[case("g=")]
    #[case("g=,,")]
    #[case("i=,|")]
    #[case("cd=-")]
    #[case("cd=")]
    #[case("unknown=1&page=3")]
    fn trivial_values_stay_absent(#[case] input: &str) {
        assert_eq!(SearchQuery::deserialize(input), SearchQuery::default());
    }

    #[rstest]
    fn malformed_duration_filters_everything(omelette: Recipe) {
        let query = SearchQuery::deserialize("cd=abc-30");
        assert_eq!(query.cook_duration, Some(DurationRange::UNSATISFIABLE));
        assert!(!query.matches(&omelette));
    }

    #[test]
    fn serializes_in_fixed_key_order() {
        let query = SearchQuery {
            exclude_ingredients: Some(set(&["x"])),
            cook_duration: Some(DurationRange::at_least(0)),
            keyword: Some("a b".to_string()),
            ingredients: Some(vec![set(&["p", "q"]), set(&["r"])]),
            genre: Some(set(&["g1", "g2"])),
            ..Default::default()
        };
        assert_eq!(query.serialize(), "kw=a+b&g=g1%2Cg2&cd=0-&i=p%7Cq%2Cr&ei=x");
    }

    #[test]
    fn trivial_fields_are_omitted() {
        let query = SearchQuery {
            keyword: Some(String::new()),
            genre: Some(BTreeSet::new()),
            cook_duration: Some(DurationRange::UNBOUNDED),
            ingredients: Some(vec![BTreeSet::new()]),
            exclude_ingredients: Some(BTreeSet::new()),
            ..Default::default()
        };
        assert_eq!(query.serialize(), "");
        assert!(query.is_unconstrained());
    }

    #[rstest]
    fn trivial_in_memory_values_match_like_absent_ones(omelette: Recipe) {
        let query = SearchQuery {
            keyword: Some(String::new()),
            genre: Some(BTreeSet::new()),
            kind: Some(BTreeSet::new()),
            difficulty: Some(BTreeSet::new()),
            ingredients: Some(vec![BTreeSet::new(), set(&["卵"])]),
            exclude_ingredients: Some(BTreeSet::new()),
            ..Default::default()
        };
        assert!(query.matches(&omelette));
        assert_eq!(query.matches(&omelette), query.normalized().matches(&omelette));

        let query = SearchQuery { ingredients: Some(vec![BTreeSet::new()]), ..Default::default() };
        assert!(query.is_unconstrained());
        assert!(query.matches(&omelette));
    }

    #[test]
    fn display_and_from_str_use_the_codec() {
        let query = SearchQuery::from("g=和風&cd=10-30");
        assert_eq!(SearchQuery::from(query.to_string().as_str()), query);
    }

    #[rstest]
    #[case("", true)]
    #[case("kw=オムレツ", true)]
    #[case("kw=朝食", true)]
    #[case("kw=夕食", false)]
    #[case("g=和風,洋風", true)]
    #[case("g=和風", false)]
    #[case("k=主菜", true)]
    #[case("k=デザート", false)]
    #[case("d=普通", false)]
    #[case("cd=10-10", true)]
    #[case("cd=11-", false)]
    #[case("pd=-5", true)]
    #[case("pd=-4", false)]
    #[case("cd=-99999999999", true)]
    #[case("i=卵|砂糖,牛乳", true)]
    #[case("i=卵|砂糖,小麦粉", false)]
    #[case("ei=小麦粉", true)]
    #[case("ei=小麦粉,バター", false)]
    fn matches_each_constraint(omelette: Recipe, #[case] input: &str, #[case] expected: bool) {
        assert_eq!(SearchQuery::deserialize(input).matches(&omelette), expected);
    }

    #[rstest]
    fn exclusion_wins_over_other_filters(omelette: Recipe) {
        let mut query = SearchQuery::deserialize("kw=オムレツ&g=洋風&i=卵");
        assert!(query.matches(&omelette));
        query.toggle_value(SetField::ExcludeIngredients, "バター", true);
        assert!(!query.matches(&omelette));
    }

    #[test]
    fn describe_lists_present_fields() {
        let query = SearchQuery::deserialize("g=和風,洋風&cd=10-30&i=卵|牛乳,砂糖&ei=小麦粉");
        assert_eq!(
            query.describe(),
            "ジャンル：和風・洋風 加熱時間：10～30分 材料：(卵 or 牛乳)・砂糖 除外：小麦粉"
        );
        assert_eq!(SearchQuery::default().describe(), "");
    }

    #[test]
    fn toggle_collapses_empty_sets() {
        let mut query = SearchQuery::default();
        query.toggle_value(SetField::Genre, "和風", true);
        assert!(query.has_value(SetField::Genre, "和風"));
        query.toggle_value(SetField::Genre, "和風", false);
        assert_eq!(query.genre, None);
        query.toggle_value(SetField::Kind, "主菜", false);
        assert_eq!(query.kind, None);
    }

    #[test]
    fn set_duration_clears_unbounded() {
        let mut query = SearchQuery::default();
        query.set_duration(DurationField::Prep, DurationRange::at_most(10));
        assert_eq!(query.duration(DurationField::Prep), Some(DurationRange::at_most(10)));
        query.set_duration(DurationField::Prep, DurationRange::UNBOUNDED);
        assert_eq!(query.prep_duration, None);
    }

    #[test]
    fn ingredient_group_editing() {
        let mut query = SearchQuery::default();
        query.add_to_ingredient_group(0, "卵");
        query.add_to_ingredient_group(0, "牛乳");
        query.add_to_ingredient_group(5, "砂糖");
        assert_eq!(query.serialize(), "i=%E5%8D%B5%7C%E7%89%9B%E4%B9%B3%2C%E7%A0%82%E7%B3%96");
        query.remove_from_ingredient_group(1, "砂糖");
        assert_eq!(query.ingredients, Some(vec![set(&["卵", "牛乳"])]));
        query.remove_from_ingredient_group(0, "卵");
        query.remove_from_ingredient_group(0, "牛乳");
        assert_eq!(query.ingredients, None);
    }

    fn name() -> impl Strategy<Value = String> {
        "[a-z0-9 &=+%?ぁ-んァ-ン一-龯]{1,6}"
    }

    fn name_set() -> impl Strategy<Value = BTreeSet<String>> {
        prop::collection::btree_set(name(), 1..4)
    }

    fn range() -> impl Strategy<Value = DurationRange> {
        (any::<Option<u32>>(), any::<Option<u32>>())
            .prop_filter("bounded", |(min, max)| min.is_some() || max.is_some())
            .prop_map(|(min, max)| DurationRange::new(min, max))
    }

    prop_compose! {
        fn meaningful_query()(
            keyword in prop::option::of("\\PC{1,10}"),
            genre in prop::option::of(name_set()),
            kind in prop::option::of(name_set()),
            difficulty in prop::option::of(name_set()),
            cook_duration in prop::option::of(range()),
            prep_duration in prop::option::of(range()),
            ingredients in prop::option::of(prop::collection::vec(name_set(), 1..4)),
            exclude_ingredients in prop::option::of(name_set()),
        ) -> SearchQuery {
            SearchQuery {
                keyword,
                genre,
                kind,
                difficulty,
                cook_duration,
                prep_duration,
                ingredients,
                exclude_ingredients,
            }
        }
    }

    proptest! {
        #[test]
        fn round_trip_reproduces_meaningful_query(query in meaningful_query()) {
            prop_assert_eq!(SearchQuery::deserialize(&query.serialize()), query);
        }

        #[test]
        fn serialize_is_idempotent(input in "[a-z=&,|0-9-]{0,30}") {
            let once = SearchQuery::deserialize(&input).serialize();
            let twice = SearchQuery::deserialize(&once).serialize();
            prop_assert_eq!(once, twice);
        }
    }
}
