fn main() {
    #[cfg(target_arch = "wasm32")]
    {
        vitrine::start();
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        eprintln!("vitrine only runs in the browser (wasm32 targets)");
    }
}
