#![allow(non_snake_case)]

use garage_portal::client::App;

fn main() {
    dioxus::launch(App);
}
