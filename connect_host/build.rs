fn main() {
    slint_build::compile("ui/app_window.slint").expect("failed to compile app_window.slint");
    println!("cargo:rerun-if-changed=ui/app_window.slint");
}
