// src/common/i18n.rs

use std::{collections::HashMap, sync::Arc};

use gettext::Catalog;

pub const DEFAULT_LANG: &str = "pt";

// Compilados pelo build.rs a partir de locales/<idioma>/messages.po
const PT_MO: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/pt.mo"));
const EN_MO: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/en.mo"));

/// Catálogos gettext por idioma. Barato de clonar (vive no `AppState`).
#[derive(Clone)]
pub struct I18nStore {
    catalogs: Arc<HashMap<&'static str, Catalog>>,
}

impl Default for I18nStore {
    fn default() -> Self {
        Self::new()
    }
}

impl I18nStore {
    pub fn new() -> Self {
        let mut catalogs = HashMap::new();

        for (lang, bytes) in [("pt", PT_MO), ("en", EN_MO)] {
            match Catalog::parse(bytes) {
                Ok(catalog) => {
                    catalogs.insert(lang, catalog);
                }
                Err(e) => tracing::error!("❌ Falha ao carregar o catálogo '{}': {}", lang, e),
            }
        }

        Self {
            catalogs: Arc::new(catalogs),
        }
    }

    fn lookup<'a>(&'a self, lang: &str, key: &'a str) -> Option<&'a str> {
        self.catalogs
            .get(lang)
            .map(|catalog| catalog.gettext(key))
            .filter(|translated| *translated != key)
    }

    /// Traduz `key` para `lang`, caindo para o português e, por fim, para a própria chave.
    /// Os `{nome}` da mensagem são trocados pelos valores de `args`.
    pub fn translate(&self, lang: &str, key: &str, args: &[(&str, String)]) -> String {
        let template = self
            .lookup(lang, key)
            .or_else(|| self.lookup(DEFAULT_LANG, key))
            .unwrap_or(key);

        args.iter().fold(template.to_string(), |msg, (name, value)| {
            msg.replace(&format!("{{{name}}}"), value)
        })
    }
}
