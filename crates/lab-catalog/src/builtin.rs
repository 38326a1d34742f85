//! Compiled-in topic catalog

use lab_core::{CatalogRecord, Category, Difficulty};

use crate::store::CatalogError;
use time::OffsetDateTime;
use time::macros::datetime;

struct Entry {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    difficulty: u8,
    category: Category,
    tags: &'static [&'static str],
    last_updated: OffsetDateTime,
}

const ENTRIES: &[Entry] = &[
    Entry {
        id: "use-form",
        title: "Form validation with React Hook Form",
        description: "Validate forms with React Hook Form, including custom validation rules.",
        difficulty: 3,
        category: Category::Hooks,
        tags: &["forms", "validation", "hooks"],
        last_updated: datetime!(2024-02-15 00:00 UTC),
    },
    Entry {
        id: "suspense-data",
        title: "Loading data with Suspense",
        description: "Explore the Suspense pattern for handling asynchronous data loading.",
        difficulty: 4,
        category: Category::Patterns,
        tags: &["suspense", "async", "loading"],
        last_updated: datetime!(2024-02-14 00:00 UTC),
    },
    Entry {
        id: "use-server",
        title: "Server actions with use server",
        description: "Run server-side operations through the use server directive.",
        difficulty: 5,
        category: Category::Apis,
        tags: &["server", "actions", "forms"],
        last_updated: datetime!(2024-02-13 00:00 UTC),
    },
    Entry {
        id: "use-state",
        title: "Understanding useState",
        description: "Manage local state in function components with the useState hook.",
        difficulty: 1,
        category: Category::Hooks,
        tags: &["state", "hooks", "react"],
        last_updated: datetime!(2024-02-20 00:00 UTC),
    },
    Entry {
        id: "use-effect",
        title: "Understanding useEffect",
        description: "Handle side effects such as data fetching, subscriptions and DOM updates with useEffect.",
        difficulty: 2,
        category: Category::Hooks,
        tags: &["side effects", "hooks", "react"],
        last_updated: datetime!(2024-02-20 00:00 UTC),
    },
    Entry {
        id: "use-context",
        title: "Understanding useContext",
        description: "Share state across components with useContext, for themes, locales and more.",
        difficulty: 2,
        category: Category::Hooks,
        tags: &["state management", "hooks", "react"],
        last_updated: datetime!(2024-02-20 00:00 UTC),
    },
    Entry {
        id: "use-reducer",
        title: "Understanding useReducer",
        description: "Manage complex component state such as todo lists and shopping carts with useReducer.",
        difficulty: 3,
        category: Category::Hooks,
        tags: &["state management", "hooks", "react"],
        last_updated: datetime!(2024-02-20 00:00 UTC),
    },
    Entry {
        id: "use-callback",
        title: "Understanding useCallback",
        description: "Avoid unnecessary re-renders by memoizing callbacks with useCallback.",
        difficulty: 3,
        category: Category::Hooks,
        tags: &["performance", "hooks", "react"],
        last_updated: datetime!(2024-02-20 00:00 UTC),
    },
    Entry {
        id: "use-memo",
        title: "Understanding useMemo",
        description: "Cache expensive computations and derived arrays with useMemo.",
        difficulty: 3,
        category: Category::Hooks,
        tags: &["performance", "hooks", "react", "caching"],
        last_updated: datetime!(2024-02-20 00:00 UTC),
    },
    Entry {
        id: "use-ref",
        title: "Understanding useRef",
        description: "Reach DOM elements, keep mutable values and manage timers with useRef.",
        difficulty: 2,
        category: Category::Hooks,
        tags: &["DOM", "hooks", "react", "refs"],
        last_updated: datetime!(2024-02-20 00:00 UTC),
    },
    Entry {
        id: "use-imperative-handle",
        title: "Understanding useImperativeHandle",
        description: "Customize the instance methods exposed to parent components, for form control or media playback.",
        difficulty: 3,
        category: Category::Hooks,
        tags: &["component communication", "hooks", "react", "ref"],
        last_updated: datetime!(2024-02-20 00:00 UTC),
    },
    Entry {
        id: "use-layout-effect",
        title: "Understanding useLayoutEffect",
        description: "Run DOM work before the browser repaints, for animations and layout measurement.",
        difficulty: 4,
        category: Category::Hooks,
        tags: &["DOM", "hooks", "react", "layout", "animation"],
        last_updated: datetime!(2024-02-20 00:00 UTC),
    },
    Entry {
        id: "use-debug-value",
        title: "Understanding useDebugValue",
        description: "Label custom hooks in developer tools, covering online status, data fetching and heavy computations.",
        difficulty: 2,
        category: Category::Hooks,
        tags: &["debugging", "hooks", "react", "devtools"],
        last_updated: datetime!(2024-02-20 00:00 UTC),
    },
    Entry {
        id: "use-deferred-value",
        title: "Understanding useDeferredValue",
        description: "Defer non-urgent UI updates to keep large lists and search suggestions responsive.",
        difficulty: 4,
        category: Category::Hooks,
        tags: &["performance", "hooks", "react", "concurrency"],
        last_updated: datetime!(2024-02-20 00:00 UTC),
    },
    Entry {
        id: "use-id",
        title: "Understanding useId",
        description: "Generate stable unique identifiers for server rendering and accessibility.",
        difficulty: 2,
        category: Category::Hooks,
        tags: &["accessibility", "SSR", "hooks", "react"],
        last_updated: datetime!(2024-02-20 00:00 UTC),
    },
    Entry {
        id: "use-transition",
        title: "Understanding useTransition",
        description: "Build smooth transitions for route changes and list animations with useTransition.",
        difficulty: 4,
        category: Category::Hooks,
        tags: &["animation", "hooks", "react", "transitions"],
        last_updated: datetime!(2024-02-20 00:00 UTC),
    },
    Entry {
        id: "use-local-storage",
        title: "Local storage with useLocalStorage",
        description: "Manage persisted browser data with a custom hook, including syncing and expiry.",
        difficulty: 2,
        category: Category::Hooks,
        tags: &["localStorage", "custom hooks", "state management"],
        last_updated: datetime!(2024-02-20 00:00 UTC),
    },
    Entry {
        id: "use-theme",
        title: "Theming with useTheme",
        description: "Switch themes and follow the system color scheme with a custom hook.",
        difficulty: 2,
        category: Category::Hooks,
        tags: &["theme", "hooks", "custom hooks", "system sync"],
        last_updated: datetime!(2024-02-20 00:00 UTC),
    },
    Entry {
        id: "use-media-query",
        title: "Responsive design with useMediaQuery",
        description: "Listen to media queries and detect device features with a custom hook.",
        difficulty: 2,
        category: Category::Hooks,
        tags: &["responsive", "media queries", "custom hooks", "device features"],
        last_updated: datetime!(2024-02-20 00:00 UTC),
    },
    Entry {
        id: "use-window-size",
        title: "Tracking window size with useWindowSize",
        description: "Respond to browser window resizes with a custom hook that stays fast and server-render safe.",
        difficulty: 2,
        category: Category::Hooks,
        tags: &["hooks", "window", "responsive"],
        last_updated: datetime!(2024-02-20 00:00 UTC),
    },
    Entry {
        id: "use",
        title: "Understanding the use hook",
        description: "Read promises, fetch data and load resources with the use hook, including caching and error handling.",
        difficulty: 4,
        category: Category::Hooks,
        tags: &["Promise", "data fetching", "resources", "hooks", "react"],
        last_updated: datetime!(2024-02-20 00:00 UTC),
    },
];

/// The topic records in catalog order
pub fn records() -> Result<Vec<CatalogRecord>, CatalogError> {
    build(ENTRIES)
}

fn build(entries: &[Entry]) -> Result<Vec<CatalogRecord>, CatalogError> {
    entries
        .iter()
        .map(|e| {
            let difficulty =
                Difficulty::new(e.difficulty).map_err(|err| CatalogError::InvalidRecord {
                    id: e.id.to_string(),
                    reason: err.to_string(),
                })?;
            Ok(
                CatalogRecord::new(e.id, e.title, e.description, difficulty, e.category)
                    .with_tags(e.tags.iter().copied())
                    .with_last_updated(e.last_updated),
            )
        })
        .collect()
}
