// build.rs
//
// Compila os catálogos .po para .mo com o msgfmt. Sem msgfmt na máquina,
// usa os .mo já compilados em locales/<idioma>/messages.mo.

use std::{env, fs, path::Path, process::Command};

const LOCALES: [&str; 2] = ["pt", "en"];

fn main() {
    println!("cargo:rerun-if-changed=locales/");

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR não definido");

    for locale in LOCALES {
        let po_path = format!("locales/{locale}/messages.po");
        let precompiled_mo_path = format!("locales/{locale}/messages.mo");
        let out_mo_path = format!("{out_dir}/{locale}.mo");

        println!("cargo:rerun-if-changed={po_path}");
        println!("cargo:rerun-if-changed={precompiled_mo_path}");

        let compiled = Command::new("msgfmt")
            .args(["-o", &out_mo_path, &po_path])
            .status()
            .map(|status| status.success())
            .unwrap_or(false);
        if compiled {
            continue;
        }

        if Path::new(&precompiled_mo_path).exists() {
            fs::copy(&precompiled_mo_path, &out_mo_path).expect("falha ao copiar o .mo pré-compilado");
        } else {
            panic!(
                "msgfmt indisponível e sem .mo pré-compilado para '{locale}'. \
                 Rode: msgfmt -o {precompiled_mo_path} {po_path}"
            );
        }
    }
}
