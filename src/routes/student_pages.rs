use crate::{
    data::Student,
    maud_conveniences::{form_submit_button, render_table, simple_form_element, title},
};
use maud::{Markup, html};

const BUTTON: &str = "bg-slate-600 hover:bg-slate-800 font-bold py-2 px-4 rounded";

pub fn list_students(students: Vec<Student>, search: Option<&str>) -> Markup {
    let empty = students.is_empty();
    let rows = students
        .into_iter()
        .map(|student| {
            [
                html! {(student.first_name)},
                html! {(student.last_name)},
                html! {(student.email)},
                html! {
                    a href={"/students?command=LOAD&studentId=" (student.id)} class="hover:text-blue-400 underline" {"Update"}
                    " | "
                    a href={"/students?command=DELETE&studentId=" (student.id)} onclick="if (!(confirm('Are you sure you want to delete this student?'))) return false" class="hover:text-red-400 underline" {"Delete"}
                },
            ]
        })
        .collect();

    html! {
        div class="bg-gray-800 p-8 rounded shadow-md max-w-4xl w-full flex flex-col space-y-4" {
            div class="flex flex-row items-center justify-between space-x-4" {
                a href="/students/new" class=(BUTTON) {"Add Student"}

                form action="/students" method="get" class="flex flex-row items-center space-x-2" {
                    input type="hidden" name="command" value="SEARCH" {}
                    label for="theSearchName" class="text-gray-300" {"Search student: "}
                    input type="text" id="theSearchName" name="theSearchName" value=[search] class="shadow border rounded py-2 px-3 bg-gray-700 border-gray-600" {}
                    button type="submit" class=(BUTTON) {"Search"}
                }
            }

            (render_table("Students", ["First Name", "Last Name", "Email", "Action"], rows))

            @if empty {
                p class="italic text-gray-400" {"No students found"}
            }
        }
    }
}

pub fn update_student_form(student: &Student) -> Markup {
    html! {
        div class="bg-gray-800 shadow-md rounded px-8 pt-6 pb-8 mb-4 w-full max-w-sm" {
            (title("Update Student"))

            form action="/students" method="get" {
                input type="hidden" name="command" value="UPDATE" {}
                input type="hidden" name="studentId" value=(student.id) {}

                (simple_form_element("firstName", "First Name", true, None, Some(student.first_name.as_str())))
                (simple_form_element("lastName", "Last Name", true, None, Some(student.last_name.as_str())))
                (simple_form_element("email", "Email", true, Some("email"), Some(student.email.as_str())))
                (form_submit_button(Some("Save")))
            }

            p class="mt-4" {
                a href="/students?command=LIST" class="hover:text-blue-400 underline" {"Back to List"}
            }
        }
    }
}

pub fn add_student_form() -> Markup {
    html! {
        div class="bg-gray-800 shadow-md rounded px-8 pt-6 pb-8 mb-4 w-full max-w-sm" {
            (title("Add Student"))

            form action="/students" method="post" {
                input type="hidden" name="command" value="ADD" {}

                (simple_form_element("firstName", "First Name", true, None, None))
                (simple_form_element("lastName", "Last Name", true, None, None))
                (simple_form_element("email", "Email", true, Some("email"), None))
                (form_submit_button(Some("Save")))
            }

            p class="mt-4" {
                a href="/students?command=LIST" class="hover:text-blue-400 underline" {"Back to List"}
            }
        }
    }
}
