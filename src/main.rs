use novacut_landing::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
