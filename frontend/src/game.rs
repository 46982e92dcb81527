use crate::board::BoardComponent;
use crate::scoreboard::ScoreboardComponent;
use common::{Action, GameState, Outcome};
use gloo::console::log;
use std::fmt;
use yew::prelude::*;

#[derive(Debug, Clone, Copy)]
pub enum Message {
    ClickCell(usize),
    ResetBoard,
    NewGame,
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Message::ClickCell(index) => write!(f, "ClickCell: {}", index),
            Message::ResetBoard => write!(f, "ResetBoard"),
            Message::NewGame => write!(f, "NewGame"),
        }
    }
}

impl From<Message> for Action {
    fn from(msg: Message) -> Self {
        match msg {
            Message::ClickCell(index) => Action::Place { index },
            Message::ResetBoard => Action::ResetBoard,
            Message::NewGame => Action::NewGame,
        }
    }
}

// Owns the only engine instance. Everything below it renders from a snapshot.
pub struct Game {
    state: GameState,
}

impl Component for Game {
    type Message = Message;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            state: GameState::new(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        log!(msg.to_string());
        match self.state.handle(msg.into()) {
            Ok(()) => true,
            // The board is untouched, so there is nothing to redraw
            Err(err) => {
                log!(format!("Ignored {}: {}", msg, err));
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let snapshot = self.state.snapshot();
        let onclick_cell = ctx.link().callback(Message::ClickCell);
        let onclick_reset = ctx.link().callback(|_| Message::ResetBoard);
        let onclick_new_game = ctx.link().callback(|_| Message::NewGame);
        let status_class = match snapshot.outcome() {
            Outcome::Won(_) => classes!("status", "status-win"),
            Outcome::Draw => classes!("status", "status-draw"),
            Outcome::InProgress => classes!("status"),
        };
        html! {
            <div class={classes!("app-root")}>
                <div class={classes!("container", "card")}>
                    <header class={classes!("header")}>
                        <h1 class={classes!("title")}>{"Tic Tac Toe"}</h1>
                        <p class={status_class}>{snapshot.status_text()}</p>
                    </header>
                    <ScoreboardComponent
                        scoreboard={*snapshot.scoreboard()}
                        activeplayer={snapshot.active_player()}/>
                    <BoardComponent
                        snapshot={snapshot}
                        onclick={onclick_cell}/>
                    <div class={classes!("controls")}>
                        <button
                            class={classes!("btn", "primary")}
                            onclick={onclick_reset}
                            aria-label="Reset Game">
                            {"Reset Game"}
                        </button>
                        <button
                            class={classes!("btn", "outline")}
                            onclick={onclick_new_game}
                            aria-label="New Game">
                            {"New Game"}
                        </button>
                    </div>
                </div>
            </div>
        }
    }
}
