use common::{Cell, CellIndex, Mark, Snapshot, BOARD_WIDTH};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BoardProps {
    pub snapshot: Snapshot,
    pub onclick: Callback<usize>,
}

#[function_component(BoardComponent)]
pub fn board(props: &BoardProps) -> Html {
    let indices: Vec<CellIndex> = CellIndex::all().collect();
    html! {
        <div class={classes!("board")}>
            {
                indices.chunks(BOARD_WIDTH).map(|row| html! {
                    <div class={classes!("row")}>
                        {
                            row.iter()
                                .map(|index| square(*index, &props.snapshot, props.onclick.clone()))
                                .collect::<Html>()
                        }
                    </div>
                }).collect::<Html>()
            }
        </div>
    }
}

fn square(index: CellIndex, snapshot: &Snapshot, onclick_square: Callback<usize>) -> Html {
    let cell = snapshot.cells()[index.get()];
    let playable = snapshot.is_playable(index);
    let onclick = Callback::from(move |_| {
        if playable {
            onclick_square.emit(index.get());
        }
    });
    let mut class = classes!("square");
    if let Some(mark) = cell.mark() {
        class.push(get_mark_class(mark));
    }
    if snapshot.is_winning_cell(index) {
        class.push("win");
    }
    html! {
        <button
            class={class}
            {onclick}
            disabled={!playable}
            aria-label={format!("Square {}", get_label(&cell))}>
            <span class={classes!("mark")}>
                { cell.mark().map(|mark| mark.to_string()).unwrap_or_default() }
            </span>
        </button>
    }
}

fn get_mark_class(mark: Mark) -> &'static str {
    match mark {
        Mark::X => "x",
        Mark::O => "o",
    }
}

fn get_label(cell: &Cell) -> String {
    match cell {
        Cell::Empty => "empty".to_string(),
        Cell::Marked { mark } => mark.to_string(),
    }
}
