use atrium_web::App;

fn main() {
    dioxus::launch(App);
}
