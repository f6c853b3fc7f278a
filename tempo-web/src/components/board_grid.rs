use crate::components::playing_card::PlayingCard;
use tempo_game::CellView;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub cells: Vec<CellView>,
    /// Taps are ignored when the round is over.
    #[prop_or(true)]
    pub interactive: bool,
    pub on_tap: Callback<usize>,
}

/// The player's 3x3 board. Marked cells carry a bean; a wrong tap shakes.
#[function_component(BoardGrid)]
pub fn board_grid(p: &Props) -> Html {
    html! {
        <div class="board-grid" role="grid" aria-label="Tablero">
            { for p.cells.iter().map(|cell| {
                let index = cell.index;
                let onclick = {
                    let cb = p.on_tap.clone();
                    Callback::from(move |_| cb.emit(index))
                };
                let class = classes!(
                    "board-cell",
                    cell.marked.then_some("marked"),
                    cell.shaken.then_some("shake"),
                );
                let label = if cell.marked {
                    format!("{} (marcada)", cell.card.title)
                } else {
                    cell.card.title.clone()
                };
                html! {
                    <button type="button" {class} {onclick} role="gridcell"
                        aria-label={label}
                        aria-pressed={cell.marked.to_string()}
                        disabled={!p.interactive || cell.marked}>
                        <PlayingCard card={cell.card.clone()} />
                        if cell.marked {
                            <span class="bean" aria-hidden="true"></span>
                        }
                    </button>
                }
            }) }
        </div>
    }
}
