use shared::format::stars;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StarRatingProps {
    pub score: f64,
    /// Print the numeric score after the stars
    #[prop_or_default]
    pub show_score: bool,
}

/// Five stars, filled up to the integer part of the score.
#[function_component(StarRating)]
pub fn star_rating(props: &StarRatingProps) -> Html {
    html! {
        <span class="star-rating" title={format!("{:.1} / 5", props.score)}>
            {for stars(props.score).into_iter().map(|filled| html! {
                <span class={classes!("star", filled.then_some("filled"))}>
                    {if filled { "★" } else { "☆" }}
                </span>
            })}
            {if props.show_score {
                html! { <span class="star-score">{format!("{:.1}", props.score)}</span> }
            } else {
                html! {}
            }}
        </span>
    }
}
