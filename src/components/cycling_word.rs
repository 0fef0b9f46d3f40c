use yew::prelude::*;

use crate::hooks::use_word_cycle;

#[derive(Properties, PartialEq)]
pub struct CyclingWordProps {
    pub words: Vec<String>,
}

#[function_component(CyclingWord)]
pub fn cycling_word(props: &CyclingWordProps) -> Html {
    let (index, visible) = use_word_cycle(props.words.len());

    let Some(word) = props.words.get(index) else {
        return html! {};
    };

    html! {
        <span class="cycling-word">
            <span class="cycling-word-glow" aria-hidden="true"></span>
            <span class={classes!("cycling-word-text", (!visible).then(|| "faded"))}>
                {word.clone()}
            </span>
        </span>
    }
}
