use yew::prelude::*;

use crate::model::{Coordinate, RankedFacility};
use crate::util::format_distance;

#[derive(Properties, PartialEq, Clone)]
pub struct FacilityListProps {
    pub entries: Vec<RankedFacility>,
    /// Emits the facility id and position of the clicked entry.
    pub on_select: Callback<(i64, Coordinate)>,
}

#[function_component(FacilityList)]
pub fn facility_list(props: &FacilityListProps) -> Html {
    html! {<>
        { for props.entries.iter().map(|r| {
            let f = &r.facility;
            let onclick = {
                let cb = props.on_select.clone();
                let (id, at) = (f.id, f.coordinate);
                Callback::from(move |_| cb.emit((id, at)))
            };
            html! {
                <div class="hospital-item" key={f.id} {onclick}>
                    <div class="hospital-name">{ f.name.clone() }</div>
                    <div class="hospital-address">{ format!("{} • {}", f.kind.label(), f.address_or_default()) }</div>
                    <div class="hospital-distance">{ format_distance(r.distance_km) }</div>
                </div>
            }
        }) }
    </>}
}
