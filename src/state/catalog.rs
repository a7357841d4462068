/// Lookup and catalog filtering
///
/// Pure, stateless derivations over a loaded collection. They are
/// recomputed on every change; a linear scan is plenty at this data
/// scale, so there is no caching or indexing here.

use super::data::Recipe;

/// Find a recipe by its stable identifier.
///
/// First match in collection order wins, which makes lookup deterministic
/// even if a dataset ever ships duplicate ids.
pub fn find_by_id(recipes: &[Recipe], id: i64) -> Option<&Recipe> {
    recipes.iter().find(|r| r.id == id)
}

/// The category tabs shown in the catalog view, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Home,
    Easy,
    Hard,
    Alcoholic,
    NonAlcoholic,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Home,
        Tab::Easy,
        Tab::Hard,
        Tab::Alcoholic,
        Tab::NonAlcoholic,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Easy => "Easy",
            Tab::Hard => "Hard",
            Tab::Alcoholic => "Alcoholic",
            Tab::NonAlcoholic => "Non-alcoholic",
        }
    }

    /// Whether a recipe belongs on this tab. Category comparison is
    /// case-insensitive; the home tab shows everything.
    pub fn matches(self, recipe: &Recipe) -> bool {
        match self {
            Tab::Home => true,
            Tab::Easy => recipe.category.eq_ignore_ascii_case("Easy"),
            Tab::Hard => recipe.category.eq_ignore_ascii_case("Hard"),
            Tab::Alcoholic => recipe.alcoholic,
            Tab::NonAlcoholic => !recipe.alcoholic,
        }
    }
}

/// Keep recipes whose name or any ingredient contains the query,
/// case-insensitively. A blank query keeps everything.
pub fn search<'a>(recipes: &'a [Recipe], query: &str) -> Vec<&'a Recipe> {
    let query = query.trim().to_lowercase();
    recipes
        .iter()
        .filter(|recipe| {
            query.is_empty()
                || recipe.name.to_lowercase().contains(&query)
                || recipe
                    .ingredients
                    .iter()
                    .any(|ingredient| ingredient.to_lowercase().contains(&query))
        })
        .collect()
}

/// The catalog view: the intersection of the active search filter and the
/// selected tab, preserving collection order.
pub fn visible<'a>(recipes: &'a [Recipe], query: &str, tab: Tab) -> Vec<&'a Recipe> {
    search(recipes, query)
        .into_iter()
        .filter(|recipe| tab.matches(recipe))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(id: i64, name: &str, ingredients: &[&str], category: &str, alcoholic: bool) -> Recipe {
        Recipe {
            id,
            name: name.to_string(),
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            instructions: String::new(),
            timer: 0,
            category: category.to_string(),
            alcoholic,
            notes: String::new(),
            image_url: None,
        }
    }

    fn collection() -> Vec<Recipe> {
        vec![
            recipe(1, "Mojito", &["White rum", "Mint", "Lime"], "Easy", true),
            recipe(2, "Old Fashioned", &["Bourbon", "Bitters"], "Hard", true),
            recipe(3, "Gin Fizz", &["Gin", "Lemon juice"], "easy", true),
            recipe(4, "Virgin Colada", &["Pineapple juice", "Coconut cream"], "Easy", false),
        ]
    }

    #[test]
    fn test_find_by_id_first_match_wins() {
        let mut recipes = collection();
        recipes.push(recipe(1, "Impostor", &[], "Hard", true));

        let found = find_by_id(&recipes, 1).unwrap();
        assert_eq!(found.name, "Mojito");
        assert!(find_by_id(&recipes, 99).is_none());
    }

    #[test]
    fn test_empty_search_keeps_everything_in_order() {
        let recipes = collection();
        let hits = search(&recipes, "");
        assert_eq!(hits.len(), recipes.len());
        let names: Vec<&str> = hits.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Mojito", "Old Fashioned", "Gin Fizz", "Virgin Colada"]);
    }

    #[test]
    fn test_search_is_case_insensitive_on_name() {
        let recipes = collection();
        let hits = search(&recipes, "gin");
        // Matches "Gin Fizz" by name and "Virgin Colada" by name too
        assert!(hits.iter().any(|r| r.name == "Gin Fizz"));
        assert!(hits.iter().any(|r| r.name == "Virgin Colada"));
    }

    #[test]
    fn test_search_matches_ingredients() {
        let recipes = collection();
        let hits = search(&recipes, "BOURBON");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Old Fashioned");
    }

    #[test]
    fn test_search_with_no_match_is_empty() {
        let recipes = collection();
        assert!(search(&recipes, "absinthe").is_empty());
    }

    #[test]
    fn test_tab_category_is_case_insensitive() {
        let recipes = collection();
        let easy = visible(&recipes, "", Tab::Easy);
        // "easy" (lowercase category) must land on the Easy tab too
        assert_eq!(easy.len(), 3);
        assert!(easy.iter().any(|r| r.name == "Gin Fizz"));
    }

    #[test]
    fn test_alcoholic_tabs_split_the_collection() {
        let recipes = collection();
        assert_eq!(visible(&recipes, "", Tab::Alcoholic).len(), 3);
        assert_eq!(visible(&recipes, "", Tab::NonAlcoholic).len(), 1);
    }

    #[test]
    fn test_search_and_tab_compose_by_intersection() {
        let recipes = collection();
        let hits = visible(&recipes, "juice", Tab::NonAlcoholic);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Virgin Colada");
    }
}
