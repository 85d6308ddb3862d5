//! Product configuration resolution
//!
//! Products are referenced by UID in some payloads and by display name or
//! historical alias in others; the resolver accepts all three. A miss is
//! `None`, never an error: callers must treat it as "no configured limits,
//! do not block the user".

use core_kernel::ProductId;

use crate::product::Product;

/// Resolves a product by UID, exact name, or declared alias
///
/// Lookup order, first hit wins:
/// 1. exact UID match;
/// 2. case-insensitive exact name match;
/// 3. case-insensitive match against any declared alias.
pub fn resolve<'a>(products: &'a [Product], key: &str) -> Option<&'a Product> {
    let trimmed = key.trim();

    if let Ok(id) = trimmed.parse::<ProductId>() {
        if let Some(product) = products.iter().find(|p| p.id == id) {
            tracing::debug!(key = trimmed, product = %product.name, "product resolved by uid");
            return Some(product);
        }
    }

    if let Some(product) = products
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(trimmed))
    {
        tracing::debug!(key = trimmed, product = %product.name, "product resolved by name");
        return Some(product);
    }

    if let Some(product) = products
        .iter()
        .find(|p| p.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(trimmed)))
    {
        tracing::debug!(key = trimmed, product = %product.name, "product resolved by alias");
        return Some(product);
    }

    tracing::debug!(key = trimmed, "no product resolved");
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::ProductFamily;

    fn product(name: &str, aliases: &[&str]) -> Product {
        Product {
            id: ProductId::new(),
            name: name.to_string(),
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
            family: ProductFamily::Other("GENERIC".to_string()),
            configuration: None,
        }
    }

    #[test]
    fn test_resolve_by_uid() {
        let products = vec![product("Habitacional MAG", &[])];
        let key = products[0].id.to_string();
        assert!(resolve(&products, &key).is_some());
    }

    #[test]
    fn test_resolve_by_name_case_insensitive() {
        let products = vec![product("Habitacional MAG", &[])];
        assert!(resolve(&products, "habitacional mag").is_some());
    }

    #[test]
    fn test_resolve_by_alias_case_insensitive() {
        let products = vec![product("Home Equity", &["HDI Home Equity"])];
        assert!(resolve(&products, "hdi home equity").is_some());
    }

    #[test]
    fn test_uid_match_wins_over_name() {
        let mut products = vec![product("A", &[]), product("B", &[])];
        products[1].name = products[0].id.to_string();
        let key = products[0].id.to_string();
        let resolved = resolve(&products, &key).unwrap();
        assert_eq!(resolved.id, products[0].id);
    }

    #[test]
    fn test_miss_returns_none() {
        let products = vec![product("A", &["B"])];
        assert!(resolve(&products, "C").is_none());
        assert!(resolve(&[], "anything").is_none());
    }
}
