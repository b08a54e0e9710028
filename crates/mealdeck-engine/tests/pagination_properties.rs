use mealdeck_engine::{Catalog, FetchContext, PAGE_SIZE, has_more};
use mealdeck_types::Meal;
use proptest::prelude::*;

fn catalog_of(count: usize) -> Catalog {
    let meals = (0..count)
        .map(|i| Meal::new(i.to_string(), format!("Meal {}", i)))
        .collect();
    let mut catalog = Catalog::new(FetchContext::Browse { letter: 'a' });
    catalog.replace(FetchContext::Browse { letter: 'a' }, meals);
    catalog
}

proptest! {
    #[test]
    fn pages_never_exceed_page_size(count in 0usize..200) {
        let mut catalog = catalog_of(count);
        loop {
            prop_assert!(catalog.current_page().len() <= PAGE_SIZE);
            if !catalog.advance() {
                break;
            }
        }
    }

    #[test]
    fn concatenated_pages_rebuild_catalog(count in 0usize..200) {
        let mut catalog = catalog_of(count);
        let mut rebuilt: Vec<Meal> = Vec::new();
        loop {
            rebuilt.extend_from_slice(catalog.current_page());
            if !catalog.advance() {
                break;
            }
        }
        prop_assert_eq!(rebuilt.as_slice(), catalog.meals());
    }

    #[test]
    fn cursor_never_passes_catalog(count in 0usize..200, clicks in 0usize..50) {
        let mut catalog = catalog_of(count);
        for _ in 0..clicks {
            let before = catalog.cursor();
            let more = catalog.has_more();
            let moved = catalog.advance();
            prop_assert_eq!(moved, more);
            if !moved {
                prop_assert_eq!(catalog.cursor(), before);
            }
            prop_assert!(catalog.cursor() * PAGE_SIZE <= catalog.len());
        }
    }

    #[test]
    fn has_more_matches_formula(len in 0usize..500, cursor in 0usize..100) {
        prop_assert_eq!(has_more(len, cursor), (cursor + 1) * PAGE_SIZE < len);
    }
}
