//! Leptos components: square, board and game.

use leptos::prelude::*;
use tictactoe_core::{BoardView, CellView, Game as GameState, GameView, MoveOrder, Position};
use tracing::{debug, instrument};

/// One clickable cell.
#[component]
pub fn Square(
    /// The rendered cell.
    #[prop(into)]
    cell: Signal<CellView>,
    /// Fired when the cell is clicked.
    on_click: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            class=move || cell.with(CellView::class)
            on:click=move |_| on_click.run(())
        >
            {move || cell.with(CellView::text)}
        </button>
    }
}

/// The 3x3 grid, three rows of three squares.
#[component]
pub fn Board(
    /// The rendered snapshot with its highlights.
    #[prop(into)]
    board: Signal<BoardView>,
    /// Fired with the clicked cell.
    on_select: Callback<Position>,
) -> impl IntoView {
    let rows = Position::ALL
        .chunks(3)
        .map(|row| {
            let squares = row
                .iter()
                .copied()
                .map(|position| {
                    let cell = Signal::derive(move || board.with(|b| *b.cell(position)));
                    let on_click = Callback::new(move |_: ()| on_select.run(position));
                    view! { <Square cell=cell on_click=on_click /> }
                })
                .collect_view();
            view! { <div class="board-row">{squares}</div> }
        })
        .collect_view();

    view! { <div>{rows}</div> }
}

/// The whole game: board, status, order toggle and move list.
#[component]
pub fn Game(
    /// Initial move list order.
    #[prop(optional)]
    order: MoveOrder,
) -> impl IntoView {
    let game = RwSignal::new(GameState::with_order(order));
    let rendered = Memo::new(move |_| game.with(GameView::render));

    let board = Signal::derive(move || rendered.with(|v| v.board.clone()));
    let on_select = Callback::new(move |position: Position| select(game, position));
    let toggle_order = move |_| {
        debug!("Toggling move order");
        game.update(GameState::toggle_order);
    };

    let moves = move || {
        rendered
            .with(|v| v.moves.clone())
            .into_iter()
            .map(|entry| {
                let step = entry.step;
                view! {
                    <li>
                        <button class=entry.class() on:click=move |_| jump(game, step)>
                            {entry.text()}
                        </button>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <div class="game">
            <div class="game-board">
                <Board board=board on_select=on_select />
            </div>
            <div class="game-info">
                <div class="status">{move || rendered.with(|v| v.status.to_string())}</div>
                <button class="order" on:click=toggle_order>
                    {move || rendered.with(GameView::order_sign)}
                </button>
                <ol>{moves}</ol>
            </div>
        </div>
    }
}

#[instrument(skip(game))]
fn select(game: RwSignal<GameState>, position: Position) {
    game.update(|g| {
        let placement = g.place_mark(position);
        debug!(?placement, "Square clicked");
    });
}

#[instrument(skip(game))]
fn jump(game: RwSignal<GameState>, step: usize) {
    game.update(|g| g.jump_to(step));
}
