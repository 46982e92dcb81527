use common::{Mark, Scoreboard};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ScoreboardProps {
    pub scoreboard: Scoreboard,
    // None once the round has a winner
    pub activeplayer: Option<Mark>,
}

#[function_component(ScoreboardComponent)]
pub fn scoreboard(props: &ScoreboardProps) -> Html {
    let scoreboard = &props.scoreboard;
    html! {
        <div class={classes!("scoreboard")}>
            { score_card(Mark::X, scoreboard.wins(Mark::X), props.activeplayer) }
            <div class={classes!("score", "card-mini", "neutral")}>
                <span class={classes!("label")}>{"Draws"}</span>
                <span class={classes!("value")}>{scoreboard.draws().to_string()}</span>
            </div>
            { score_card(Mark::O, scoreboard.wins(Mark::O), props.activeplayer) }
        </div>
    }
}

fn score_card(mark: Mark, wins: u32, active_player: Option<Mark>) -> Html {
    let class = if active_player == Some(mark) {
        classes!("score", "card-mini", "active")
    } else {
        classes!("score", "card-mini")
    };
    html! {
        <div class={class}>
            <span class={classes!("label")}>{mark.to_string()}</span>
            <span class={classes!("value")}>{wins.to_string()}</span>
        </div>
    }
}
