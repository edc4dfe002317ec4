use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CardGridProps {
    /// Element id of the container (`driversList`, `bookingResults`).
    pub id: AttrValue,
    #[prop_or(220)]
    pub min_card_width: u32,
    pub children: Children,
}

/// Responsive grid holding driver or booking cards.
pub struct CardGrid;

impl Component for CardGrid {
    type Message = ();
    type Properties = CardGridProps;

    fn create(_ctx: &Context<Self>) -> Self {
        CardGrid
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let style = format!(
            "display: grid;
             grid-template-columns: repeat(auto-fill, minmax({}px, 1fr));
             gap: 16px;
             margin-top: 16px;",
            props.min_card_width
        );

        html! {
            <div id={props.id.clone()} style={style}>
                { for props.children.iter() }
            </div>
        }
    }
}
