//! Naming helpers for code generation
//!
//! Model names come straight from the workbook (`User`, `Product Category`,
//! `order_item`), so every derived identifier goes through here.

use inflector::Inflector;

/// Lucide icon chosen by the first keyword found in a model name
const ICON_KEYWORDS: &[(&str, &str)] = &[
    ("user", "Users"),
    ("product", "Package"),
    ("order", "ShoppingCart"),
    ("category", "Shapes"),
    ("brand", "Award"),
    ("voucher", "Gift"),
    ("coupon", "Ticket"),
    ("contact", "Phone"),
    ("page", "FileText"),
    ("template", "LayoutTemplate"),
    ("admin", "UserCog"),
    ("catalogue", "BookOpen"),
    ("group", "UserCog"),
    ("history", "History"),
];

/// Icon used when no keyword matches
pub const DEFAULT_ICON: &str = "LayoutGrid";

/// Template helpers for Handlebars code generation
pub struct TemplateHelpers;

impl TemplateHelpers {
    /// Convert string to `snake_case`
    ///
    /// # Examples
    ///
    /// ```
    /// # use panelgen::generator::TemplateHelpers;
    /// assert_eq!(TemplateHelpers::to_snake_case("UserProfile"), "user_profile");
    /// assert_eq!(TemplateHelpers::to_snake_case("Product Category"), "product_category");
    /// ```
    #[must_use]
    pub fn to_snake_case(input: &str) -> String {
        input.to_snake_case()
    }

    /// Convert string to `PascalCase`, used for component names
    ///
    /// # Examples
    ///
    /// ```
    /// # use panelgen::generator::TemplateHelpers;
    /// assert_eq!(TemplateHelpers::to_pascal_case("user_profile"), "UserProfile");
    /// assert_eq!(TemplateHelpers::to_pascal_case("Product Category"), "ProductCategory");
    /// ```
    #[must_use]
    pub fn to_pascal_case(input: &str) -> String {
        input.to_pascal_case()
    }

    /// Convert string to camelCase
    ///
    /// # Examples
    ///
    /// ```
    /// # use panelgen::generator::TemplateHelpers;
    /// assert_eq!(TemplateHelpers::to_camel_case("user_profile"), "userProfile");
    /// ```
    #[must_use]
    pub fn to_camel_case(input: &str) -> String {
        input.to_camel_case()
    }

    /// Convert string to kebab-case
    ///
    /// # Examples
    ///
    /// ```
    /// # use panelgen::generator::TemplateHelpers;
    /// assert_eq!(TemplateHelpers::to_kebab_case("UserProfile"), "user-profile");
    /// ```
    #[must_use]
    pub fn to_kebab_case(input: &str) -> String {
        input.to_kebab_case()
    }

    /// Pluralize a word
    ///
    /// # Examples
    ///
    /// ```
    /// # use panelgen::generator::TemplateHelpers;
    /// assert_eq!(TemplateHelpers::pluralize("post"), "posts");
    /// assert_eq!(TemplateHelpers::pluralize("category"), "categories");
    /// ```
    #[must_use]
    pub fn pluralize(input: &str) -> String {
        input.to_plural()
    }

    /// Listing route for a model (kebab-case plural)
    ///
    /// # Examples
    ///
    /// ```
    /// # use panelgen::generator::TemplateHelpers;
    /// assert_eq!(TemplateHelpers::to_route_path("User"), "/users");
    /// assert_eq!(TemplateHelpers::to_route_path("UserProfile"), "/user-profiles");
    /// ```
    #[must_use]
    pub fn to_route_path(model: &str) -> String {
        format!("/{}", Self::pluralize(&Self::to_kebab_case(model)))
    }

    /// Base route for a single record (kebab-case singular)
    ///
    /// # Examples
    ///
    /// ```
    /// # use panelgen::generator::TemplateHelpers;
    /// assert_eq!(TemplateHelpers::to_record_path("UserProfile"), "/user-profile");
    /// ```
    #[must_use]
    pub fn to_record_path(model: &str) -> String {
        format!("/{}", Self::to_kebab_case(model))
    }

    /// Get human-readable title from model name
    ///
    /// # Examples
    ///
    /// ```
    /// # use panelgen::generator::TemplateHelpers;
    /// assert_eq!(TemplateHelpers::to_title("UserProfile"), "User Profile");
    /// ```
    #[must_use]
    pub fn to_title(model: &str) -> String {
        model.to_title_case()
    }

    /// Get human-readable plural title
    ///
    /// # Examples
    ///
    /// ```
    /// # use panelgen::generator::TemplateHelpers;
    /// assert_eq!(TemplateHelpers::to_plural_title("UserProfile"), "User Profiles");
    /// ```
    #[must_use]
    pub fn to_plural_title(model: &str) -> String {
        Self::pluralize(&Self::to_title(model))
    }

    /// Make a field name safe to use as a TypeScript property
    ///
    /// # Examples
    ///
    /// ```
    /// # use panelgen::generator::TemplateHelpers;
    /// assert_eq!(TemplateHelpers::to_identifier("first name"), "first_name");
    /// assert_eq!(TemplateHelpers::to_identifier("price($)"), "price___");
    /// ```
    #[must_use]
    pub fn to_identifier(field_name: &str) -> String {
        field_name
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
            .collect()
    }

    /// Pick a lucide icon for a model
    ///
    /// # Examples
    ///
    /// ```
    /// # use panelgen::generator::TemplateHelpers;
    /// assert_eq!(TemplateHelpers::icon_for_model("OrderItem"), "ShoppingCart");
    /// assert_eq!(TemplateHelpers::icon_for_model("Invoice"), "LayoutGrid");
    /// ```
    #[must_use]
    pub fn icon_for_model(model: &str) -> &'static str {
        let lower = model.to_lowercase();
        ICON_KEYWORDS
            .iter()
            .find(|(keyword, _)| lower.contains(keyword))
            .map_or(DEFAULT_ICON, |(_, icon)| icon)
    }

    /// Every icon the dashboard and sidebar may reference, deduplicated
    #[must_use]
    pub fn all_icons() -> Vec<&'static str> {
        let mut icons: Vec<&'static str> = Vec::new();
        for (_, icon) in ICON_KEYWORDS {
            if !icons.contains(icon) {
                icons.push(icon);
            }
        }
        icons.push(DEFAULT_ICON);
        icons
    }
}
