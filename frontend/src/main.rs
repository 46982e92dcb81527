use yew::prelude::*;

mod board;
mod game;
mod scoreboard;

#[function_component(Main)]
fn app() -> Html {
    html! {
        <game::Game />
    }
}

fn main() {
    yew::Renderer::<Main>::new().render();
}
