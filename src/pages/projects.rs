use yew::prelude::*;

use crate::components::project_gallery::{Project, ProjectGallery};
use crate::components::reveal::Reveal;

const CATEGORIES: [(&str, &str); 4] = [
    ("all", "Alle"),
    ("bathroom", "Bad"),
    ("plumbing", "Rørlegging"),
    ("heating", "Varme"),
];

fn projects() -> Vec<Project> {
    vec![
        Project {
            title: "Nytt bad på Majorstuen",
            category: "bathroom",
            description: "Totalrenovering med gulvvarme og innebygget toalett.",
            image: "/assets/images/projects/bad-majorstuen.jpg",
        },
        Project {
            title: "Rør-i-rør i enebolig",
            category: "plumbing",
            description: "Utskifting av gamle kobberrør i hele huset.",
            image: "/assets/images/projects/ror-i-ror.jpg",
        },
        Project {
            title: "Vannbåren varme i kjeller",
            category: "heating",
            description: "Nytt varmeanlegg koblet mot luft-til-vann-varmepumpe.",
            image: "/assets/images/projects/vannbaren-varme.jpg",
        },
        Project {
            title: "Bad med walk-in dusj",
            category: "bathroom",
            description: "Slukløsning i flis og glassvegg.",
            image: "/assets/images/projects/walk-in.jpg",
        },
        Project {
            title: "Nytt stakeanlegg i borettslag",
            category: "plumbing",
            description: "Fornying av avløp i tolv leiligheter.",
            image: "/assets/images/projects/borettslag.jpg",
        },
    ]
}

#[function_component(Projects)]
pub fn projects_page() -> Html {
    html! {
        <section class="section projects-page">
            <div class="container">
                <Reveal class="section-header">
                    <h1>{"Prosjekter"}</h1>
                    <p>{"Et utvalg av jobbene vi har gjort den siste tiden."}</p>
                </Reveal>
                <ProjectGallery projects={projects()} categories={CATEGORIES.to_vec()} />
            </div>
        </section>
    }
}
