use log::error;
use stylist::Style;
use yew::prelude::*;

/// Mounts `css` under a generated class name. A parse failure is logged and
/// the element just goes unstyled.
pub fn scoped(css: &'static str) -> Classes {
    match Style::new(css) {
        Ok(style) => classes!(style.get_class_name().to_string()),
        Err(e) => {
            error!("Failed to mount component style: {}", e);
            Classes::new()
        }
    }
}

pub const COOKIE_BANNER: &str = r#"
    position: fixed;
    left: 1.5rem;
    right: 1.5rem;
    bottom: 1.5rem;
    z-index: 60;
    max-width: 40rem;
    margin: 0 auto;
    padding: 1.25rem 1.5rem;
    display: flex;
    gap: 1.5rem;
    align-items: center;
    justify-content: space-between;
    background: rgba(9, 9, 11, 0.92);
    border: 1px solid rgba(255, 255, 255, 0.1);
    border-radius: 1rem;
    backdrop-filter: blur(12px);
    font-size: 0.85rem;
    color: rgba(255, 255, 255, 0.6);

    a {
        color: #818cf8;
        text-decoration: underline;
    }

    button {
        flex-shrink: 0;
        padding: 0.6rem 1.25rem;
        border: none;
        border-radius: 0.5rem;
        background: #4f46e5;
        color: white;
        font-weight: 600;
        cursor: pointer;
    }

    button:hover {
        background: #6366f1;
    }

    @media (max-width: 640px) {
        flex-direction: column;
        align-items: stretch;
    }
"#;

pub const LEGAL_MODAL: &str = r#"
    position: fixed;
    inset: 0;
    z-index: 70;
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 1.5rem;
    background: rgba(0, 0, 0, 0.75);
    backdrop-filter: blur(6px);

    .legal-dialog {
        position: relative;
        width: 100%;
        max-width: 48rem;
        max-height: 80vh;
        overflow-y: auto;
        padding: 2.5rem;
        background: #09090b;
        border: 1px solid rgba(255, 255, 255, 0.1);
        border-radius: 1.5rem;
        color: rgba(255, 255, 255, 0.7);
        line-height: 1.7;
    }

    .legal-dialog h2 {
        color: white;
        margin-top: 0;
    }

    .legal-dialog h3 {
        color: #a5b4fc;
        margin-top: 2rem;
        font-size: 1rem;
        text-transform: uppercase;
        letter-spacing: 0.08em;
    }

    .legal-close {
        position: absolute;
        top: 1rem;
        right: 1rem;
        background: none;
        border: none;
        color: rgba(255, 255, 255, 0.4);
        font-size: 1.25rem;
        cursor: pointer;
    }

    .legal-close:hover {
        color: white;
    }
"#;
